//! 診断ログの初期化
//!
//! 利用者向けの出力は stdout / stderr へ直接書き、
//! `tracing` は診断用（既定は warn 以上、`RUST_LOG` で変更可）。

use tracing_subscriber::EnvFilter;

pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // テストなどで二重初期化されても無視
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
