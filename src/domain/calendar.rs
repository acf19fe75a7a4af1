//! 欠損日付の検出

use chrono::{Days, NaiveDate};

use super::solution::{SolutionStore, format_date};

/// 最初のパズルの日付
pub fn first_puzzle_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2021, 6, 19).expect("2021-06-19 is a valid date")
}

/// 欠損チェックの結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingDates {
    /// ストアに無い日付（昇順）
    pub missing: Vec<NaiveDate>,
    pub yesterday: NaiveDate,
    /// チェック対象の最終日。昨日分はまだ公開されていない可能性がある
    pub day_before_yesterday: NaiveDate,
}

impl MissingDates {
    pub fn missing_strings(&self) -> Vec<String> {
        self.missing.iter().copied().map(format_date).collect()
    }

    pub fn yesterday_str(&self) -> String {
        format_date(self.yesterday)
    }

    pub fn day_before_yesterday_str(&self) -> String {
        format_date(self.day_before_yesterday)
    }
}

/// `start` から「一昨日」までの各日付のうち、ストアに無いものを列挙します。
///
/// `today` は呼び出し側が渡す（テストで固定するため）。
pub fn find_missing_dates(
    store: &SolutionStore,
    start: NaiveDate,
    today: NaiveDate,
) -> MissingDates {
    let yesterday = today - Days::new(1);
    let day_before_yesterday = yesterday - Days::new(1);

    let missing = start
        .iter_days()
        .take_while(|d| *d <= day_before_yesterday)
        .filter(|d| !store.contains(*d))
        .collect();

    MissingDates {
        missing,
        yesterday,
        day_before_yesterday,
    }
}
