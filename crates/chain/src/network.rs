//! Network targets and node settings

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// The two networks the dashboard can talk to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Mainnet,
    Testnet,
}

impl Network {
    /// Select a target from the name the wallet reports.
    ///
    /// Only an exact, case-insensitive "mainnet" selects mainnet. Devnet,
    /// local and custom networks all fall through to testnet.
    pub fn from_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("mainnet") {
            Network::Mainnet
        } else {
            Network::Testnet
        }
    }

    pub fn default_node_url(&self) -> &'static str {
        match self {
            Network::Mainnet => "https://api.mainnet.aptoslabs.com/v1",
            Network::Testnet => "https://api.testnet.aptoslabs.com/v1",
        }
    }

    pub fn chain_id(&self) -> u8 {
        match self {
            Network::Mainnet => 1,
            Network::Testnet => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
        }
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Node endpoints and commitment polling settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeConfig {
    /// Overrides the public mainnet fullnode
    pub mainnet_url: Option<String>,
    /// Overrides the public testnet fullnode
    pub testnet_url: Option<String>,
    /// Give up waiting for commitment after this many seconds
    pub wait_timeout_secs: u64,
    /// Delay between commitment polls
    pub poll_interval_ms: u64,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            mainnet_url: None,
            testnet_url: None,
            wait_timeout_secs: 20,
            poll_interval_ms: 1000,
        }
    }
}

impl NodeConfig {
    pub fn node_url(&self, network: Network) -> String {
        let url = match network {
            Network::Mainnet => self.mainnet_url.as_deref(),
            Network::Testnet => self.testnet_url.as_deref(),
        };
        url.unwrap_or(network.default_node_url())
            .trim_end_matches('/')
            .to_string()
    }

    pub fn wait_timeout(&self) -> Duration {
        Duration::from_secs(self.wait_timeout_secs)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}
