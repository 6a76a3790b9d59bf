//! CLI module for sensu-tor-check
//!
//! Binds flags and environment variables into a [`CheckConfig`].

use clap::Parser;
use sensu_tor_check_common::config::{DEFAULT_TOR_PROXY, PLUGIN_NAME, PLUGIN_SHORT};
use sensu_tor_check_common::{CheckConfig, CheckError};

/// Sensu check for onion urls
#[derive(Parser, Debug)]
#[command(name = PLUGIN_NAME, about = PLUGIN_SHORT)]
#[command(version, long_about = None)]
#[command(after_help = r#"ENVIRONMENT VARIABLES:
    CHECK_ONION              Onion address to check
    CHECK_TOR_PROXY          Tor proxy URL (default: socks5h://127.0.0.1:9050)
    TOR_CHECK_LOG_LEVEL      Log level written to stderr (default: warn)

EVENT ANNOTATIONS (Sensu event piped on stdin, check wins over entity):
    sensu.io/plugins/sensu-tor-check/config/onion       Overrides --onion
    sensu.io/plugins/sensu-tor-check/config/tor-proxy   Overrides --tor-proxy
"#)]
pub struct Cli {
    /// Onion address to check
    #[arg(short, long, env = "CHECK_ONION")]
    pub onion: Option<String>,

    /// Tor proxy the request is routed through (9150 for Tor Browser)
    #[arg(long, env = "CHECK_TOR_PROXY", default_value = DEFAULT_TOR_PROXY)]
    pub tor_proxy: String,
}

impl Cli {
    /// Build the check configuration
    pub fn into_config(self) -> CheckConfig {
        CheckConfig::new(self.onion.unwrap_or_default()).with_tor_proxy(self.tor_proxy)
    }
}

/// Turn a clap parse error into a check error
///
/// Only the first line of clap's rendering is kept; the usage block is not
/// part of the check output.
pub fn usage_error(err: &clap::Error) -> CheckError {
    let rendered = err.to_string();
    let first = rendered
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("invalid arguments");
    CheckError::Usage(first.trim_start_matches("error: ").to_string())
}
