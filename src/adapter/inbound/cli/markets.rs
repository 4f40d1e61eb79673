//! Handler for the `markets` command group.

use std::path::Path;

use serde_json::json;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::dispatch::load_config_toml;
use crate::adapter::inbound::cli::{operator, output};
use crate::domain::{Market, ProfileId};
use crate::error::Result;

#[derive(Tabled)]
struct MarketRow {
    #[tabled(rename = "Id")]
    id: i32,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    market_type: &'static str,
    #[tabled(rename = "Wallet")]
    wallet: i32,
    #[tabled(rename = "Receive")]
    receive: String,
    #[tabled(rename = "Publish")]
    publish: String,
}

impl From<&Market> for MarketRow {
    fn from(market: &Market) -> Self {
        Self {
            id: market.id.get(),
            name: market.name.clone(),
            market_type: market.market_type.as_str(),
            wallet: market.wallet_id.get(),
            receive: market.receive_address.to_string(),
            publish: market
                .publish_address
                .as_ref()
                .map_or_else(|| "-".to_string(), ToString::to_string),
        }
    }
}

/// Execute `markets list`.
pub async fn execute_list(config_path: &Path, profile: i32) -> Result<()> {
    let config_toml = load_config_toml(config_path)?;
    let markets = operator::operator()
        .list_markets(&config_toml, ProfileId::new(profile))
        .await?;

    if output::is_json() {
        output::json_output(json!({
            "command": "markets.list",
            "profile": profile,
            "markets": markets
                .iter()
                .map(|m| json!({
                    "id": m.id,
                    "name": m.name,
                    "type": m.market_type.as_str(),
                    "wallet_id": m.wallet_id,
                    "receive_address": m.receive_address,
                    "publish_address": m.publish_address,
                }))
                .collect::<Vec<_>>(),
        }));
        return Ok(());
    }

    output::section(&format!("Markets for profile {profile}"));
    if markets.is_empty() {
        output::note("(none)");
        output::hint(&format!(
            "run {} to seed the default market",
            output::highlight("market-seed bootstrap --profile <id>")
        ));
        return Ok(());
    }

    let rows: Vec<MarketRow> = markets.iter().map(MarketRow::from).collect();
    output::lines(&Table::new(rows).to_string());
    Ok(())
}
