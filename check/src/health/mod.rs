//! ヘルスチェック
//!
//! 入力検証 → プロキシ解析 → GETリクエストの順に1回だけ実行し、
//! 必ず1つの `HealthVerdict` を返す。

pub mod onion_checker;

pub use onion_checker::OnionHealthChecker;

use sensu_tor_check_common::{CheckConfig, CheckError, HealthVerdict};
use tracing::{debug, info, warn};

use crate::proxy::ProxyEndpoint;

/// Run the check for one invocation
///
/// Never fails: every error is turned into a verdict.
pub async fn run_check(config: &CheckConfig) -> HealthVerdict {
    let verdict = execute(config)
        .await
        .unwrap_or_else(HealthVerdict::from);
    info!(state = %verdict.state, message = %verdict.message, "Check finished");
    verdict
}

async fn execute(config: &CheckConfig) -> Result<HealthVerdict, CheckError> {
    config.validate()?;

    let proxy = ProxyEndpoint::parse(&config.tor_proxy)?;
    debug!(proxy = %proxy, target = %config.onion, "Checking onion service");
    if !proxy.resolves_remotely() && is_onion_target(&config.onion) {
        // socks5:// はローカルで名前解決するため .onion は解決できない
        warn!(
            proxy = %proxy,
            target = %config.onion,
            "Proxy resolves host names locally; use socks5h:// for onion addresses"
        );
    }

    let checker = OnionHealthChecker::new(&proxy)?;
    let status = checker.check(&config.onion).await?;

    Ok(HealthVerdict::ok(format!(
        "{} returned status code {}",
        config.onion,
        status.as_u16()
    )))
}

/// Whether the target host is a `.onion` name
fn is_onion_target(target: &str) -> bool {
    reqwest::Url::parse(target.trim())
        .ok()
        .and_then(|url| url.host_str().map(|host| host.ends_with(".onion")))
        .unwrap_or(false)
}
