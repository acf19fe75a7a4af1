//! 解答レコード・ストアとリポジトリ抽象 – ドメイン層

use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::fmt;
use std::io;

use crate::error::{Result, SolutionsError};

/// 日付の入出力フォーマット
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// `YYYY-MM-DD` をパース
pub fn parse_date(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .map_err(|_| SolutionsError::InvalidDate(text.to_string()))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// 1 日分の解答
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionRecord {
    pub date: NaiveDate,
    pub word: String, // 大文字の英単語
}

impl SolutionRecord {
    /// `<YYYY-MM-DD> <WORD>` 形式の 1 行をパースします。
    ///
    /// 空白区切りのトークンがちょうど 2 個でない行、
    /// 先頭トークンが日付として解釈できない行は `None`。
    pub fn parse_line(line: &str) -> Option<Self> {
        let mut tokens = line.split_whitespace();
        let (date, word) = match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(date), Some(word), None) => (date, word),
            _ => return None,
        };
        Some(Self {
            date: parse_date(date).ok()?,
            word: word.to_string(),
        })
    }
}

impl fmt::Display for SolutionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.date.format(DATE_FORMAT), self.word)
    }
}

/// 日付 → 単語 の全件マップ。反復は常に日付昇順
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolutionStore {
    entries: BTreeMap<NaiveDate, String>,
}

impl SolutionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, date: NaiveDate) -> Option<&str> {
        self.entries.get(&date).map(String::as_str)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.entries.contains_key(&date)
    }

    /// 追加 or 置換。以前の単語を返す
    pub fn insert(&mut self, record: SolutionRecord) -> Option<String> {
        self.entries.insert(record.date, record.word)
    }

    /// 日付昇順のレコード列
    pub fn records(&self) -> impl Iterator<Item = SolutionRecord> + '_ {
        self.entries.iter().map(|(date, word)| SolutionRecord {
            date: *date,
            word: word.clone(),
        })
    }
}

impl FromIterator<SolutionRecord> for SolutionStore {
    fn from_iter<I: IntoIterator<Item = SolutionRecord>>(iter: I) -> Self {
        let mut store = SolutionStore::new();
        for record in iter {
            store.insert(record);
        }
        store
    }
}

/// 解答ストア永続化 I/F
pub trait SolutionRepository: Send + Sync {
    /// 全件読み込み。ファイルが存在しなければ空ストア
    fn load(&self) -> io::Result<SolutionStore>;

    /// 全件を日付昇順で書き直す
    fn save(&self, store: &SolutionStore) -> io::Result<()>;

    /// メモリ上のストアへ追加し、全件書き直し
    fn persist(&self, store: &mut SolutionStore, record: SolutionRecord) -> io::Result<()> {
        store.insert(record);
        self.save(store)
    }
}
