use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    about = "Idempotent Wordle solutions fetcher",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// 取得する日付 (YYYY-MM-DD)。省略時は欠損チェック + 昨日分の取得
    /// 引数が 1 つなら `-` 始まりでも日付として検証する
    #[arg(allow_hyphen_values = true)]
    pub date: Option<String>,
}

/// 実行モード
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// 欠損を報告し、昨日分を取得
    DailyCheck,
    /// 指定日のみ取得
    SingleDate(String),
}

impl Cli {
    pub fn mode(self) -> Mode {
        match self.date {
            Some(date) => Mode::SingleDate(date),
            None => Mode::DailyCheck,
        }
    }
}

pub fn usage(program: &str) -> String {
    format!("Usage: {program} [YYYY-MM-DD]")
}
