//! Node RPC connection settings.

use serde::{Deserialize, Serialize};

/// Particl mainnet RPC endpoint on the local host.
pub const DEFAULT_NODE_URL: &str = "http://127.0.0.1:51735";

/// Connection settings for the node's JSON-RPC interface.
/// Password is loaded from `MARKET_SEED_RPC_PASSWORD` at runtime (never from config file).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NodeConfig {
    #[serde(default = "default_url")]
    pub url: String,

    /// RPC user for basic auth. No auth header is sent when unset.
    #[serde(default)]
    pub user: Option<String>,

    /// Loaded from `MARKET_SEED_RPC_PASSWORD` env var at runtime.
    #[serde(skip)]
    pub password: Option<String>,

    /// Per-request timeout.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_url() -> String {
    DEFAULT_NODE_URL.to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            user: None,
            password: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}
