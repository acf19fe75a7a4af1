//! wordle_solutions CLI: 日々の Wordle 解答を取得し、日付順のテキストファイルへ保存します。
//!
//! - 引数なし: 一昨日までの欠損を報告し、昨日分が無ければ取得
//! - `YYYY-MM-DD`: 指定日の解答を取得（既にあれば何もしない）
use chrono::Local;
use clap::Parser;
use std::io;
use std::process::ExitCode;
use tracing::debug;
use wordle_solutions::{
    application::CommandHandler,
    cli::{Cli, usage},
    error::SolutionsError,
    infrastructure::{
        config::AppConfig, external::nyt_adapter::NytSolutionFetcher,
        store::TextFileSolutionRepo,
    },
    utils::{config::EnvConfig, env::load_env, logging::init_logging},
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // 引数エラー時はファイルにもネットワークにも触れない
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(_) => {
            let program = std::env::args()
                .next()
                .unwrap_or_else(|| "wordle_solutions".to_string());
            eprintln!("{}", usage(&program));
            return ExitCode::from(1);
        }
    };

    let env_file = load_env();
    EnvConfig::init();
    init_logging();
    if let Some(path) = env_file {
        debug!(path = %path.display(), "loaded env file");
    }

    match run(cli).await {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

async fn run(cli: Cli) -> Result<u8, SolutionsError> {
    let config = AppConfig::from_env(&EnvConfig::get())?;
    debug!(
        path = %config.solutions_path.display(),
        base_url = %config.base_url,
        start_date = %config.start_date,
        "loaded config"
    );

    let repo = TextFileSolutionRepo::new(config.solutions_path);
    let fetcher = NytSolutionFetcher::new(&config.base_url, config.fetch_timeout)?;
    let handler = CommandHandler::new(repo, fetcher, config.start_date);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let outcome = handler
        .handle(cli.mode(), Local::now().date_naive(), &mut out)
        .await?;
    Ok(outcome.exit_code())
}
