//! グローバル環境変数設定
//!
//! アプリケーション全体で使用する環境変数を一元管理。
//! プロセス起動時に一度だけ初期化し、以降はどこからでもアクセス可能。

use once_cell::sync::OnceCell;
use std::sync::Arc;

/// グローバル環境変数設定
static ENV_CONFIG: OnceCell<Arc<EnvConfig>> = OnceCell::new();

/// 環境変数設定
#[derive(Debug, Clone, Default)]
pub struct EnvConfig {
    /// 解答ファイルのパス（未設定ならデータディレクトリ配下）
    pub solutions_path: Option<String>,
    /// API のベース URL
    pub base_url: Option<String>,
    /// XDG Data Home ディレクトリ
    pub xdg_data_home: Option<String>,
    /// 環境変数ファイルのパス
    pub env_path: Option<String>,
}

impl EnvConfig {
    fn from_process_env() -> Self {
        EnvConfig {
            solutions_path: non_empty_var("WORDLE_SOLUTIONS_PATH"),
            base_url: non_empty_var("WORDLE_SOLUTIONS_BASE_URL"),
            xdg_data_home: non_empty_var("XDG_DATA_HOME"),
            env_path: non_empty_var("WORDLE_SOLUTIONS_ENV_PATH"),
        }
    }

    /// 環境変数から設定を初期化
    ///
    /// 既に初期化済みの場合は何もしない（冪等）。
    pub fn init() {
        if ENV_CONFIG.get().is_some() {
            return;
        }
        let _ = ENV_CONFIG.set(Arc::new(Self::from_process_env()));
    }

    /// 設定を取得
    ///
    /// # Panics
    /// `init()`が呼ばれていない場合パニックする
    pub fn get() -> Arc<EnvConfig> {
        ENV_CONFIG
            .get()
            .expect("EnvConfig not initialized. Call EnvConfig::init() first")
            .clone()
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        EnvConfig::init();
        let first = EnvConfig::get();
        EnvConfig::init();
        assert!(Arc::ptr_eq(&first, &EnvConfig::get()));
    }
}
