//! テキストファイル版 SolutionRepository 実装
//!
//! 1 行 1 レコード `<YYYY-MM-DD> <WORD>`、日付昇順。
//! 書き込みは常に全件を一時ファイルへ書いてから rename します。
use crate::domain::solution::{SolutionRecord, SolutionRepository, SolutionStore};
use std::{
    fs,
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};
use tracing::debug;

pub struct TextFileSolutionRepo {
    path: PathBuf,
}

/// 読み込み結果と、ファイル上の並びが昇順だったかどうか
struct ReadOutcome {
    store: SolutionStore,
    sorted: bool,
}

impl TextFileSolutionRepo {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }

    fn read_records(&self) -> io::Result<ReadOutcome> {
        let reader = BufReader::new(fs::File::open(&self.path)?);
        let mut store = SolutionStore::new();
        let mut sorted = true;
        let mut last_date = None;

        for (index, bytes) in reader.split(b'\n').enumerate() {
            // UTF-8 として読めない行も不正行扱い（他の行は残す）
            let Ok(line) = String::from_utf8(bytes?) else {
                debug!(line_no = index + 1, "skipping non UTF-8 line");
                continue;
            };
            let Some(record) = SolutionRecord::parse_line(&line) else {
                debug!(line_no = index + 1, line = %line, "skipping malformed line");
                continue;
            };
            if last_date.is_some_and(|last| record.date < last) {
                sorted = false;
            }
            last_date = Some(record.date);
            store.insert(record);
        }

        Ok(ReadOutcome { store, sorted })
    }
}

impl SolutionRepository for TextFileSolutionRepo {
    /// 読み込みエラーは報告して空ストア扱い。
    /// 並びが崩れていれば全件を書き直してから返す。
    fn load(&self) -> io::Result<SolutionStore> {
        if !self.path.exists() {
            return Ok(SolutionStore::new());
        }

        let outcome = match self.read_records() {
            Ok(outcome) => outcome,
            Err(e) => {
                eprintln!("Error reading file: {e}");
                debug!(path = %self.path.display(), error = %e, "treating unreadable store as empty");
                return Ok(SolutionStore::new());
            }
        };

        if !outcome.sorted {
            eprintln!(
                "⚠ Warning: {} is not sorted. Fixing...",
                self.path.display()
            );
            self.save(&outcome.store)?;
            eprintln!("✓ File has been sorted.");
        }

        Ok(outcome.store)
    }

    fn save(&self, store: &SolutionStore) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let tmp = self.tmp_path();
        {
            let mut w = BufWriter::new(fs::File::create(&tmp)?);
            for record in store.records() {
                writeln!(w, "{record}")?;
            }
            w.flush()?;
        }
        fs::rename(tmp, &self.path)?;
        debug!(path = %self.path.display(), records = store.len(), "solutions written");
        Ok(())
    }
}
