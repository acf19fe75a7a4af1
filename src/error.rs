//! 統一エラーハンドリング
//!
//! wordle_solutions 全体で使用する統一エラー型を定義します。
//! 取得失敗 (`fetch` が結果を返さない) はエラーではなく `None` として扱い、
//! ここには含めません。

use std::io;
use thiserror::Error;

/// wordle_solutions 全体で使用する統一エラー型
#[derive(Debug, Error)]
pub enum SolutionsError {
    // ========================================
    // 入力関連エラー
    // ========================================
    #[error("Invalid date format '{0}'. Use YYYY-MM-DD")]
    InvalidDate(String),

    // ========================================
    // 永続化関連エラー
    // ========================================
    #[error("Failed to write solutions file: {0}")]
    StoreIo(io::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ========================================
    // HTTP 関連エラー
    // ========================================
    #[error("HTTP client initialization error: {0}")]
    HttpClientInit(String),

    // ========================================
    // 設定関連エラー
    // ========================================
    #[error("Configuration initialization error: {0}")]
    ConfigInitError(String),
}

/// 統一Result型エイリアス
pub type Result<T> = std::result::Result<T, SolutionsError>;

impl SolutionsError {
    /// プロセス終了コード。現状すべて 1
    pub fn exit_code(&self) -> u8 {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_date_message_matches_cli_output() {
        let err = SolutionsError::InvalidDate("2021-13-01".into());
        assert_eq!(
            err.to_string(),
            "Invalid date format '2021-13-01'. Use YYYY-MM-DD"
        );
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn io_errors_convert_to_generic_io() {
        let err: SolutionsError = io::Error::new(io::ErrorKind::BrokenPipe, "closed").into();
        assert!(matches!(err, SolutionsError::Io(_)));
    }
}
