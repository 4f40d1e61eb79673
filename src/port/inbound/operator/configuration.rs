//! Configuration projections for operator-facing adapters.

use serde::Serialize;

use crate::error::Result;

/// Environment variable holding the node RPC password.
pub const RPC_PASSWORD_ENV: &str = "MARKET_SEED_RPC_PASSWORD";

/// Environment variable naming a file that holds the node RPC password.
pub const RPC_PASSWORD_FILE_ENV: &str = "MARKET_SEED_RPC_PASSWORD_FILE";

/// Full configuration projection for operator-facing output.
///
/// Secrets never appear here; only whether one was loaded.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigView {
    pub database: String,
    pub log_level: String,
    pub log_format: String,
    pub node_url: String,
    pub node_user: Option<String>,
    pub node_timeout_secs: u64,
    pub rpc_password_loaded: bool,
    pub wallet_name: String,
    pub on_key_rejected: &'static str,
}

/// Configuration use cases for operator-facing adapters.
pub trait ConfigurationOperator: Send + Sync {
    /// Build a projection for `config show`.
    fn show_config(&self, config_toml: &str) -> Result<ConfigView>;

    /// Install the global log subscriber, optionally overriding the level.
    fn start_logging(&self, config_toml: &str, level: Option<&str>) -> Result<()>;
}
