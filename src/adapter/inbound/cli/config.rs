//! Handler for the `config` command group.

use std::fs;
use std::path::Path;

use crate::adapter::inbound::cli::dispatch::load_config_toml;
use crate::adapter::inbound::cli::{operator, output};
use crate::error::{ConfigError, Result};
use crate::port::inbound::operator::configuration::RPC_PASSWORD_ENV;

/// Default config template with documentation.
const CONFIG_TEMPLATE: &str = include_str!("../../../../config.toml.example");

/// Execute `config init`.
pub fn execute_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::InvalidValue {
            field: "config",
            reason: "file already exists (use --force to overwrite)".to_string(),
        }
        .into());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, CONFIG_TEMPLATE)?;

    if output::is_json() {
        output::json_output(serde_json::json!({
            "command": "config.init",
            "path": path.display().to_string(),
        }));
        return Ok(());
    }

    output::section("Config Initialized");
    output::success("Created configuration file");
    output::field("Path", path.display());
    output::section("Next Steps");
    output::note(&format!("1. Edit {} with your node settings", path.display()));
    output::note(&format!("2. Set {RPC_PASSWORD_ENV} if the node requires auth"));
    output::note("3. Run: market-seed settings set --profile <id> <key> <value>");
    output::note("4. Run: market-seed bootstrap --profile <id>");
    Ok(())
}

/// Execute `config show`.
pub fn execute_show(path: &Path) -> Result<()> {
    let config_toml = load_config_toml(path)?;
    let view = operator::operator().show_config(&config_toml)?;

    if output::is_json() {
        output::json_output(serde_json::json!({
            "command": "config.show",
            "path": path.display().to_string(),
            "config": serde_json::to_value(&view)?,
        }));
        return Ok(());
    }

    output::section("Effective Configuration");
    output::field("Path", path.display());
    output::field("Database", &view.database);

    output::section("Logging");
    output::field("Level", &view.log_level);
    output::field("Format", &view.log_format);

    output::section("Node");
    output::field("URL", &view.node_url);
    output::field("User", view.node_user.as_deref().unwrap_or("-"));
    output::field("Timeout", format!("{}s", view.node_timeout_secs));
    if view.rpc_password_loaded {
        output::success(&format!("RPC password loaded from {RPC_PASSWORD_ENV}"));
    } else {
        output::note("RPC password not set");
    }

    output::section("Bootstrap");
    output::field("Wallet", &view.wallet_name);
    output::field("Key rejected", view.on_key_rejected);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_execute_init_writes_template() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        execute_init(&path, false).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), CONFIG_TEMPLATE);
    }

    #[test]
    fn test_execute_init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "database = \"mine.db\"").unwrap();

        let result = execute_init(&path, false);

        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue { field: "config", .. }))
        ));
        assert_eq!(fs::read_to_string(&path).unwrap(), "database = \"mine.db\"");
    }

    #[test]
    fn test_execute_init_force_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "old").unwrap();

        execute_init(&path, true).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), CONFIG_TEMPLATE);
    }
}
