//! sensu-tor-check
//!
//! Sensu check that verifies an onion service answers through the local Tor
//! proxy.

#![warn(missing_docs)]

/// CLIインターフェース
pub mod cli;

/// Sensuイベント入力（stdin）
pub mod event;

/// ヘルスチェック
pub mod health;

/// ロギング初期化ユーティリティ
pub mod logging;

/// Torプロキシ記述子
pub mod proxy;

/// 結果出力と終了コード
pub mod report;

pub use health::{run_check, OnionHealthChecker};
pub use proxy::ProxyEndpoint;
