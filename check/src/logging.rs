//! ロギング初期化ユーティリティ
//!
//! 標準出力はチェック結果の1行だけに使うため、ログは標準エラーへ出す。

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
pub const LOG_LEVEL_ENV: &str = "TOR_CHECK_LOG_LEVEL";

const DEFAULT_LOG_LEVEL: &str = "warn";

/// Initialize tracing on stderr
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let level = std::env::var(LOG_LEVEL_ENV).unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());
    let filter = EnvFilter::try_new(&level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
}
