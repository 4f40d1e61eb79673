//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file with environment variable overrides
//! for sensitive values like `MARKET_SEED_RPC_PASSWORD`.
//!
//! # Example
//!
//! ```no_run
//! use market_seed::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use url::Url;

use super::logging::{LoggingConfig, LOG_FORMATS};
use super::node::NodeConfig;
use crate::application::bootstrap::BootstrapConfig;
use crate::error::{ConfigError, Result};
use crate::port::inbound::operator::configuration::{RPC_PASSWORD_ENV, RPC_PASSWORD_FILE_ENV};

/// Main application configuration.
///
/// Load from a TOML file using [`Config::load`] or parse directly with
/// [`Config::parse_toml`]. Every section is optional.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// Path to SQLite database file.
    ///
    /// Defaults to "market-seed.db" in the current directory.
    #[serde(default = "default_database_path")]
    pub database: String,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Node RPC connection.
    #[serde(default)]
    pub node: NodeConfig,

    /// Reconciliation pass settings.
    #[serde(default)]
    pub bootstrap: BootstrapConfig,
}

fn default_database_path() -> String {
    "market-seed.db".to_string()
}

fn read_rpc_password() -> Result<Option<String>> {
    if let Ok(password) = std::env::var(RPC_PASSWORD_ENV) {
        return Ok(Some(password));
    }
    if let Ok(path) = std::env::var(RPC_PASSWORD_FILE_ENV) {
        let contents = fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let password = contents.trim().to_string();
        if password.is_empty() {
            return Err(ConfigError::MissingField {
                field: RPC_PASSWORD_FILE_ENV,
            }
            .into());
        }
        return Ok(Some(password));
    }
    Ok(None)
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// Loads the RPC password from `MARKET_SEED_RPC_PASSWORD` or the file
    /// named by `MARKET_SEED_RPC_PASSWORD_FILE`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The TOML content is malformed
    /// - Validation fails (e.g., unknown log format)
    /// - The password file cannot be read or is empty
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;

        // Never from the config file.
        config.node.password = read_rpc_password()?;

        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Validate configuration values.
    #[allow(clippy::result_large_err)]
    fn validate(&self) -> Result<()> {
        if self.database.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "database" }.into());
        }

        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "logging.format",
                reason: format!("must be one of {}", LOG_FORMATS.join(", ")),
            }
            .into());
        }

        if self.node.url.is_empty() {
            return Err(ConfigError::MissingField { field: "node.url" }.into());
        }
        let url = Url::parse(&self.node.url).map_err(|e| ConfigError::InvalidValue {
            field: "node.url",
            reason: e.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidValue {
                field: "node.url",
                reason: format!("unsupported scheme {}", url.scheme()),
            }
            .into());
        }
        if self.node.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "node.timeout_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        let wallet = &self.bootstrap.wallet_name;
        if wallet.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "bootstrap.wallet_name",
            }
            .into());
        }
        if wallet.contains(['/', '\\']) {
            return Err(ConfigError::InvalidValue {
                field: "bootstrap.wallet_name",
                reason: "must be a plain wallet name, not a path".to_string(),
            }
            .into());
        }

        Ok(())
    }

    /// Initialize logging based on configuration.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::bootstrap::KeyRejectionPolicy;
    use crate::error::Error;

    #[test]
    fn empty_file_uses_defaults() {
        let config = Config::parse_toml("").unwrap();
        assert_eq!(config.database, "market-seed.db");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.node.url, "http://127.0.0.1:51735");
        assert_eq!(config.node.timeout_secs, 30);
        assert_eq!(config.bootstrap.wallet_name, "market.dat");
        assert_eq!(config.bootstrap.on_key_rejected, KeyRejectionPolicy::Continue);
    }

    #[test]
    fn example_config_parses_with_defaults() {
        let config = Config::parse_toml(include_str!("../../../config.toml.example")).unwrap();
        assert_eq!(config.bootstrap.wallet_name, "market.dat");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn parses_every_section() {
        let config = Config::parse_toml(
            r#"
            database = "/var/lib/market/market.db"

            [logging]
            level = "debug"
            format = "json"

            [node]
            url = "http://10.0.0.2:51935"
            user = "rpcuser"
            timeout_secs = 5

            [bootstrap]
            wallet_name = "shop.dat"
            on_key_rejected = "abort"
            "#,
        )
        .unwrap();

        assert_eq!(config.database, "/var/lib/market/market.db");
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.node.user.as_deref(), Some("rpcuser"));
        assert_eq!(config.node.timeout_secs, 5);
        assert_eq!(config.bootstrap.wallet_name, "shop.dat");
        assert_eq!(config.bootstrap.on_key_rejected, KeyRejectionPolicy::Abort);
    }

    #[test]
    fn password_in_file_is_ignored() {
        let config = Config::parse_toml(
            r#"
            [node]
            password = "from-file"
            "#,
        )
        .unwrap();
        assert_ne!(config.node.password.as_deref(), Some("from-file"));
    }

    #[test]
    fn rejects_unknown_log_format() {
        let result = Config::parse_toml("[logging]\nformat = \"xml\"");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "logging.format",
                ..
            }))
        ));
    }

    #[test]
    fn rejects_non_http_node_url() {
        let result = Config::parse_toml("[node]\nurl = \"ftp://node\"");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "node.url",
                ..
            }))
        ));
    }

    #[test]
    fn rejects_zero_timeout() {
        let result = Config::parse_toml("[node]\ntimeout_secs = 0");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "node.timeout_secs",
                ..
            }))
        ));
    }

    #[test]
    fn rejects_wallet_path() {
        let result = Config::parse_toml("[bootstrap]\nwallet_name = \"../market.dat\"");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "bootstrap.wallet_name",
                ..
            }))
        ));
    }

    #[test]
    fn rejects_empty_database() {
        let result = Config::parse_toml("database = \"\"");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::MissingField { field: "database" }))
        ));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        assert!(matches!(
            Config::parse_toml("[node"),
            Err(Error::Config(ConfigError::Parse(_)))
        ));
    }
}
