//! コマンドハンドラー
//!
//! # 責任
//! - ストアの読み込みと欠損チェック
//! - 必要な場合のみ解答を 1 回取得し、全件書き直し
//! - 利用者向けレポートの出力

use chrono::NaiveDate;
use std::io::Write;

use crate::application::traits::SolutionFetcher;
use crate::cli::Mode;
use crate::domain::calendar::find_missing_dates;
use crate::domain::solution::{
    SolutionRecord, SolutionRepository, SolutionStore, format_date, parse_date,
};
use crate::error::{Result, SolutionsError};

/// 欠損日付として表示する最大件数
pub const MISSING_DISPLAY_LIMIT: usize = 20;

/// 1 回の実行結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Success,
    FetchFailed,
}

impl RunOutcome {
    pub fn exit_code(self) -> u8 {
        match self {
            RunOutcome::Success => 0,
            RunOutcome::FetchFailed => 1,
        }
    }
}

/// コマンドハンドラー
pub struct CommandHandler<R: SolutionRepository, F: SolutionFetcher> {
    repo: R,
    fetcher: F,
    start_date: NaiveDate,
}

impl<R: SolutionRepository, F: SolutionFetcher> CommandHandler<R, F> {
    pub fn new(repo: R, fetcher: F, start_date: NaiveDate) -> Self {
        Self {
            repo,
            fetcher,
            start_date,
        }
    }

    /// モードに応じて処理を振り分け
    pub async fn handle<W: Write>(
        &self,
        mode: Mode,
        today: NaiveDate,
        out: &mut W,
    ) -> Result<RunOutcome> {
        match mode {
            Mode::DailyCheck => self.daily_check(today, out).await,
            Mode::SingleDate(arg) => self.single_date(&arg, out).await,
        }
    }

    /// 既定モード: 欠損を報告し、昨日分が無ければ取得
    pub async fn daily_check<W: Write>(&self, today: NaiveDate, out: &mut W) -> Result<RunOutcome> {
        let mut store = self.load_store()?;
        let report = find_missing_dates(&store, self.start_date, today);

        writeln!(out, "Existing solutions: {}", store.len())?;
        writeln!(
            out,
            "Checking up to: {} (day before yesterday)",
            report.day_before_yesterday_str()
        )?;
        writeln!(out)?;

        if report.missing.is_empty() {
            writeln!(out, "✓ No missing solutions (up to day before yesterday)")?;
        } else {
            writeln!(out, "⚠ Missing {} solutions:", report.missing.len())?;
            for date in report.missing.iter().take(MISSING_DISPLAY_LIMIT) {
                writeln!(out, "  {}", format_date(*date))?;
            }
            if report.missing.len() > MISSING_DISPLAY_LIMIT {
                writeln!(
                    out,
                    "  ... and {} more",
                    report.missing.len() - MISSING_DISPLAY_LIMIT
                )?;
            }
        }
        writeln!(out)?;

        writeln!(out, "Checking yesterday ({})...", report.yesterday_str())?;
        if let Some(word) = store.get(report.yesterday) {
            writeln!(out, "  ✓ Already present: {word}")?;
        } else {
            write!(out, "  Fetching... ")?;
            out.flush()?;
            if !self.fetch_and_store(&mut store, report.yesterday, out).await? {
                return Ok(RunOutcome::FetchFailed);
            }
        }

        writeln!(out)?;
        writeln!(out, "Current total: {} solutions", store.len())?;
        Ok(RunOutcome::Success)
    }

    /// 日付指定モード: 既にあれば何もしない
    pub async fn single_date<W: Write>(&self, arg: &str, out: &mut W) -> Result<RunOutcome> {
        // ストアに触れる前に検証
        let date = parse_date(arg)?;
        let mut store = self.load_store()?;

        if let Some(word) = store.get(date) {
            writeln!(out, "✓ Already present: {} {word}", format_date(date))?;
            return Ok(RunOutcome::Success);
        }

        write!(out, "Fetching solution for {}... ", format_date(date))?;
        out.flush()?;
        if self.fetch_and_store(&mut store, date, out).await? {
            Ok(RunOutcome::Success)
        } else {
            Ok(RunOutcome::FetchFailed)
        }
    }

    fn load_store(&self) -> Result<SolutionStore> {
        self.repo.load().map_err(SolutionsError::StoreIo)
    }

    /// 取得できたら保存して true
    async fn fetch_and_store<W: Write>(
        &self,
        store: &mut SolutionStore,
        date: NaiveDate,
        out: &mut W,
    ) -> Result<bool> {
        let Some(word) = self.fetcher.fetch(date).await else {
            writeln!(out, "✗ Failed to fetch")?;
            return Ok(false);
        };

        let record = SolutionRecord {
            date,
            word: word.clone(),
        };
        if let Err(e) = self.repo.persist(store, record) {
            writeln!(out, "✗ Failed to save")?;
            return Err(SolutionsError::StoreIo(e));
        }
        writeln!(out, "✓ {word}")?;
        Ok(true)
    }
}
