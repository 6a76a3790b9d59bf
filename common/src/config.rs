//! 設定管理
//!
//! CheckConfig とプラグインメタデータ定数

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::CheckError;
use crate::protocol::Event;

/// プラグイン名
pub const PLUGIN_NAME: &str = "sensu-tor-check";

/// プラグインの短い説明
pub const PLUGIN_SHORT: &str = "Sensu check for onion urls";

/// イベントアノテーションで設定を上書きする際のキー接頭辞
pub const PLUGIN_KEYSPACE: &str = "sensu.io/plugins/sensu-tor-check/config";

/// ローカルTorデーモンのSOCKSポート（Tor Browserの場合は9150）
///
/// `socks5h` はプロキシ側で名前解決を行う。`.onion` はローカルで解決できない。
pub const DEFAULT_TOR_PROXY: &str = "socks5h://127.0.0.1:9050";

/// チェック全体のタイムアウト（秒）
pub const CHECK_TIMEOUT_SECS: u64 = 30;

/// チェック全体のタイムアウト
pub fn check_timeout() -> Duration {
    Duration::from_secs(CHECK_TIMEOUT_SECS)
}

/// チェック設定
///
/// 1回の実行につき1度だけ組み立て、以降は参照で渡す。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckConfig {
    /// チェック対象のオニオンアドレス (デフォルト: 空)
    #[serde(default)]
    pub onion: String,

    /// 経由するTorプロキシ (デフォルト: "socks5h://127.0.0.1:9050")
    #[serde(default = "default_tor_proxy")]
    pub tor_proxy: String,
}

fn default_tor_proxy() -> String {
    DEFAULT_TOR_PROXY.to_string()
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            onion: String::new(),
            tor_proxy: default_tor_proxy(),
        }
    }
}

impl CheckConfig {
    /// 対象アドレスを指定して作成（プロキシはデフォルト）
    pub fn new(onion: impl Into<String>) -> Self {
        Self {
            onion: onion.into(),
            ..Self::default()
        }
    }

    /// プロキシを差し替える
    pub fn with_tor_proxy(mut self, tor_proxy: impl Into<String>) -> Self {
        self.tor_proxy = tor_proxy.into();
        self
    }

    /// Sensuイベントのアノテーションで上書きする
    ///
    /// `<keyspace>/onion` と `<keyspace>/tor-proxy` を参照する。
    /// チェックのアノテーションがエンティティのアノテーションより優先される。
    pub fn with_event(mut self, event: Option<&Event>) -> Self {
        let Some(event) = event else {
            return self;
        };
        if let Some(onion) = event.annotation(&annotation_key("onion")) {
            self.onion = onion.to_string();
        }
        if let Some(proxy) = event.annotation(&annotation_key("tor-proxy")) {
            self.tor_proxy = proxy.to_string();
        }
        self
    }

    /// 入力検証（ネットワークアクセス前に実行）
    ///
    /// 対象アドレスが空なら `MissingTarget`（Warning）を返す。
    pub fn validate(&self) -> Result<(), CheckError> {
        if self.onion.trim().is_empty() {
            return Err(CheckError::MissingTarget);
        }
        Ok(())
    }
}

/// 設定パスに対応するアノテーションキー
pub fn annotation_key(path: &str) -> String {
    format!("{}/{}", PLUGIN_KEYSPACE, path)
}
