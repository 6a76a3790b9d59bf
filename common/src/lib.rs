//! sensu-tor-check 共通ライブラリ
//!
//! チェック本体とレポート層の間で共有する型・エラー・設定・イベント定義

#![warn(missing_docs)]

/// 設定（チェック対象・プロキシ・プラグインメタデータ）
pub mod config;

/// 統一エラー型
pub mod error;

/// Sensuイベント定義（stdin経由で受け取る）
pub mod protocol;

/// ヘルス判定の型定義
pub mod types;

pub use config::CheckConfig;
pub use error::CheckError;
pub use types::{HealthState, HealthVerdict};
