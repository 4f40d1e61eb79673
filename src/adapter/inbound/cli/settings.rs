//! Handlers for the `settings` command group.

use std::path::Path;

use serde_json::json;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::dispatch::load_config_toml;
use crate::adapter::inbound::cli::{operator, output};
use crate::domain::setting::DEFAULT_MARKETPLACE_PRIVATE_KEY;
use crate::domain::{PrivateKey, ProfileId, Setting};
use crate::error::Result;

#[derive(Tabled)]
struct SettingRow {
    #[tabled(rename = "Key")]
    key: String,
    #[tabled(rename = "Value")]
    value: String,
}

/// Value safe to print: private keys are redacted.
fn display_value(setting: &Setting) -> String {
    if setting.key == DEFAULT_MARKETPLACE_PRIVATE_KEY {
        PrivateKey::from(setting.value.as_str()).redacted()
    } else {
        setting.value.clone()
    }
}

/// Execute `settings set`.
pub async fn execute_set(config_path: &Path, profile: i32, key: &str, value: &str) -> Result<()> {
    let config_toml = load_config_toml(config_path)?;
    let setting = operator::operator()
        .set_setting(&config_toml, ProfileId::new(profile), key, value)
        .await?;

    if output::is_json() {
        output::json_output(json!({
            "command": "settings.set",
            "profile": profile,
            "key": setting.key,
            "value": display_value(&setting),
        }));
        return Ok(());
    }

    output::success(&format!(
        "{} = {}",
        output::highlight(&setting.key),
        display_value(&setting)
    ));
    Ok(())
}

/// Execute `settings list`.
pub async fn execute_list(config_path: &Path, profile: i32) -> Result<()> {
    let config_toml = load_config_toml(config_path)?;
    let settings = operator::operator()
        .list_settings(&config_toml, ProfileId::new(profile))
        .await?;

    if output::is_json() {
        output::json_output(json!({
            "command": "settings.list",
            "profile": profile,
            "settings": settings
                .iter()
                .map(|s| json!({ "key": s.key, "value": display_value(s) }))
                .collect::<Vec<_>>(),
        }));
        return Ok(());
    }

    output::section(&format!("Settings for profile {profile}"));
    if settings.is_empty() {
        output::note("(none)");
        output::hint(&format!(
            "run {} to add one",
            output::highlight("market-seed settings set --profile <id> <key> <value>")
        ));
        return Ok(());
    }

    let rows: Vec<SettingRow> = settings
        .iter()
        .map(|s| SettingRow {
            key: s.key.clone(),
            value: display_value(s),
        })
        .collect();
    output::lines(&Table::new(rows).to_string());
    Ok(())
}
