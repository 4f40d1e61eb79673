//! Configuration operator implementation.

use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::inbound::operator::configuration::{ConfigView, ConfigurationOperator};

use super::entry::Operator;

impl ConfigurationOperator for Operator {
    fn show_config(&self, config_toml: &str) -> Result<ConfigView> {
        let config = Config::parse_toml(config_toml)?;

        Ok(ConfigView {
            database: config.database,
            log_level: config.logging.level,
            log_format: config.logging.format,
            node_url: config.node.url,
            node_user: config.node.user,
            node_timeout_secs: config.node.timeout_secs,
            rpc_password_loaded: config.node.password.is_some(),
            wallet_name: config.bootstrap.wallet_name,
            on_key_rejected: config.bootstrap.on_key_rejected.as_str(),
        })
    }

    fn start_logging(&self, config_toml: &str, level: Option<&str>) -> Result<()> {
        let config = Config::parse_toml(config_toml)?;
        match level {
            Some(level) => config.logging.with_level(level).init(),
            None => config.init_logging(),
        }
        Ok(())
    }
}
