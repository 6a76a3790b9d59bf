//! エラー型定義
//!
//! 統一エラー型（thiserror使用）
//!
//! どのエラーもプロセスのクラッシュとして外に出さず、
//! `HealthVerdict`に変換してレポート層へ渡す。

use std::time::Duration;
use thiserror::Error;

use crate::types::{HealthState, HealthVerdict};

/// Check error type
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CheckError {
    /// Target address not supplied
    #[error("onion address is required")]
    MissingTarget,

    /// Proxy string could not be turned into a proxy descriptor
    #[error("error parsing Tor proxy URL({proxy}): {reason}")]
    MalformedProxy {
        /// Raw proxy string
        proxy: String,
        /// Parser message
        reason: String,
    },

    /// HTTP client construction failed
    #[error("error creating HTTP client: {0}")]
    Client(String),

    /// Request did not complete
    #[error("error making GET request: {0}")]
    Transport(String),

    /// Request did not complete within the check timeout
    #[error("error making GET request: timeout after {after:?}: {detail}")]
    Timeout {
        /// Configured timeout
        after: Duration,
        /// Underlying transport error text
        detail: String,
    },

    /// Response status other than 200
    #[error("{target} returned status code {status}")]
    UnexpectedStatus {
        /// Requested address
        target: String,
        /// Observed status code
        status: u16,
    },

    /// Response body could not be drained
    #[error("error reading body of response: {0}")]
    BodyRead(String),

    /// Command line could not be parsed
    #[error("invalid arguments: {0}")]
    Usage(String),

    /// Sensu event on stdin could not be used
    #[error("error reading event: {0}")]
    Event(String),
}

impl CheckError {
    /// Health state this error reports as
    pub fn state(&self) -> HealthState {
        match self {
            CheckError::MissingTarget => HealthState::Warning,
            CheckError::Usage(_) | CheckError::Event(_) => HealthState::Unknown,
            CheckError::MalformedProxy { .. }
            | CheckError::Client(_)
            | CheckError::Transport(_)
            | CheckError::Timeout { .. }
            | CheckError::UnexpectedStatus { .. }
            | CheckError::BodyRead(_) => HealthState::Critical,
        }
    }
}

impl From<CheckError> for HealthVerdict {
    fn from(err: CheckError) -> Self {
        HealthVerdict::new(err.state(), err.to_string())
    }
}
