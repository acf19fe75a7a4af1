//! `.env` の読み込み
//!
//! `WORDLE_SOLUTIONS_ENV_PATH` があればそのファイル、無ければカレントの `.env`。
//! 解答ファイルのパスや API のベース URL をここで上書きできる。
//! ファイルが無い・読めない場合は何もしない（既定値で動く）。

use std::path::PathBuf;

/// 読み込んだファイルのパスを返す
pub fn load_env() -> Option<PathBuf> {
    match std::env::var_os("WORDLE_SOLUTIONS_ENV_PATH") {
        Some(path) => {
            let path = PathBuf::from(path);
            dotenvy::from_path(&path).ok().map(|_| path)
        }
        None => dotenvy::dotenv().ok(),
    }
}

