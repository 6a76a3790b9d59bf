//! オニオンサービスヘルスチェッカー
//!
//! Torプロキシ経由でGETを1回だけ送信し、結果を分類する

use reqwest::{Client, StatusCode};
use sensu_tor_check_common::config::check_timeout;
use sensu_tor_check_common::CheckError;
use std::error::Error as StdError;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

use crate::proxy::ProxyEndpoint;

/// Onion service health checker
///
/// Owns a client that routes every connection through the Tor proxy. One
/// checker performs one request per [`check`](Self::check) call and never
/// retries.
#[derive(Debug, Clone)]
pub struct OnionHealthChecker {
    /// HTTPクライアント
    client: Client,
    /// タイムアウト（接続・ハンドシェイク・ヘッダ・本文を含む）
    timeout: Duration,
}

impl OnionHealthChecker {
    /// Create a checker with the fixed check timeout
    pub fn new(proxy: &ProxyEndpoint) -> Result<Self, CheckError> {
        Self::with_timeout(proxy, check_timeout())
    }

    /// Create a checker with a custom timeout
    pub fn with_timeout(proxy: &ProxyEndpoint, timeout: Duration) -> Result<Self, CheckError> {
        let client = Client::builder()
            .proxy(proxy.to_proxy()?)
            .timeout(timeout)
            .build()
            .map_err(|e| CheckError::Client(error_chain(&e)))?;

        debug!(proxy = %proxy, timeout = ?timeout, "HTTP client ready");
        Ok(Self { client, timeout })
    }

    /// Configured timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Request `target` once and classify the response
    ///
    /// Returns the status code on success. Only 200 with a fully drained body
    /// counts as healthy. The response is dropped on every return path.
    pub async fn check(&self, target: &str) -> Result<StatusCode, CheckError> {
        let start = Instant::now();
        debug!(target = %target, "Sending GET request");

        let mut response = self.client.get(target).send().await.map_err(|e| {
            warn!(target = %target, error = %e, "GET request failed");
            if e.is_timeout() {
                CheckError::Timeout {
                    after: self.timeout,
                    detail: error_chain(&e),
                }
            } else {
                CheckError::Transport(error_chain(&e))
            }
        })?;

        let status = response.status();
        debug!(
            target = %target,
            status = status.as_u16(),
            latency_ms = start.elapsed().as_millis() as u64,
            "Response headers received"
        );

        // 200以外はすべて異常
        if status != StatusCode::OK {
            return Err(CheckError::UnexpectedStatus {
                target: target.to_string(),
                status: status.as_u16(),
            });
        }

        // 本文は読み捨てる（内容は検査しない）
        let mut drained = 0usize;
        while let Some(chunk) = response.chunk().await.map_err(|e| {
            warn!(target = %target, error = %e, "Body read failed");
            CheckError::BodyRead(error_chain(&e))
        })? {
            drained += chunk.len();
        }

        debug!(
            target = %target,
            bytes = drained,
            latency_ms = start.elapsed().as_millis() as u64,
            "Health check succeeded"
        );
        Ok(status)
    }
}

/// Flatten an error and its sources into one line
pub(crate) fn error_chain(err: &dyn StdError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
