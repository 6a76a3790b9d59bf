//! Tor proxy descriptor
//!
//! Turns the configured proxy string into a validated descriptor before any
//! connection is attempted.

use reqwest::{Proxy, Url};
use sensu_tor_check_common::CheckError;
use std::fmt;

/// Schemes reqwest can route through
const SUPPORTED_SCHEMES: &[&str] = &["socks5", "socks5h", "http", "https"];

/// Parsed proxy endpoint (`scheme://host:port`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyEndpoint {
    url: Url,
    host: String,
    port: u16,
}

impl ProxyEndpoint {
    /// Parse and validate a proxy string
    ///
    /// SOCKS has no default port, so the port must always be explicit.
    pub fn parse(raw: &str) -> Result<Self, CheckError> {
        let malformed = |reason: String| CheckError::MalformedProxy {
            proxy: raw.to_string(),
            reason,
        };

        let url = Url::parse(raw.trim()).map_err(|e| malformed(e.to_string()))?;

        if !SUPPORTED_SCHEMES.contains(&url.scheme()) {
            return Err(malformed(format!("unsupported scheme '{}'", url.scheme())));
        }
        let host = match url.host_str() {
            Some(host) if !host.is_empty() => host.to_string(),
            _ => return Err(malformed("missing host".to_string())),
        };
        let port = url
            .port()
            .ok_or_else(|| malformed("missing port".to_string()))?;

        Ok(Self { url, host, port })
    }

    /// Proxy scheme
    pub fn scheme(&self) -> &str {
        self.url.scheme()
    }

    /// Proxy host
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Proxy port
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Whether host names are resolved by the proxy
    pub fn resolves_remotely(&self) -> bool {
        matches!(self.scheme(), "socks5h" | "http" | "https")
    }

    /// reqwest proxy that intercepts every request
    pub fn to_proxy(&self) -> Result<Proxy, CheckError> {
        Proxy::all(self.url.clone()).map_err(|e| CheckError::MalformedProxy {
            proxy: self.url.to_string(),
            reason: e.to_string(),
        })
    }
}

impl fmt::Display for ProxyEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}:{}", self.scheme(), self.host, self.port)
    }
}
