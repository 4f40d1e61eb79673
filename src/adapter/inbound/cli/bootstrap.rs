//! Handler for the `bootstrap` command.

use std::path::Path;

use serde_json::{json, Value};

use crate::adapter::inbound::cli::dispatch::load_config_toml;
use crate::adapter::inbound::cli::{operator, output};
use crate::domain::ProfileId;
use crate::error::Result;
use crate::port::inbound::bootstrap::BootstrapReport;

/// Execute `bootstrap --profile <id>`.
pub async fn execute(config_path: &Path, profile: i32) -> Result<()> {
    let config_toml = load_config_toml(config_path)?;
    let report = operator::operator()
        .bootstrap(&config_toml, ProfileId::new(profile))
        .await?;

    if output::is_json() {
        output::json_output(report_json(profile, &report));
        return Ok(());
    }
    render(&report);
    Ok(())
}

fn report_json(profile: i32, report: &BootstrapReport) -> Value {
    let market = &report.market;
    json!({
        "command": "bootstrap",
        "profile": profile,
        "complete": report.is_complete(),
        "market": {
            "id": market.id,
            "name": market.name,
            "type": market.market_type.as_str(),
            "outcome": report.market_outcome.label(),
            "receive_address": market.receive_address,
            "publish_address": market.publish_address,
        },
        "wallet": {
            "id": report.wallet.get().id,
            "name": report.wallet.get().name,
            "outcome": report.wallet.label(),
            "node": report.node_wallet.as_str(),
        },
        "registered": report
            .registered
            .iter()
            .map(|b| json!({ "address": b.address, "public_key": b.public_key }))
            .collect::<Vec<_>>(),
        "rejected": report.rejected,
    })
}

fn render(report: &BootstrapReport) {
    let market = &report.market;

    output::header(env!("CARGO_PKG_VERSION"));

    output::section("Market");
    output::field("Id", market.id);
    output::field("Name", &market.name);
    output::field("Type", market.market_type);
    output::field("Record", report.market_outcome.label());
    output::field("Receive", &market.receive_address);
    if let Some(address) = &market.publish_address {
        output::field("Publish", address);
    }

    output::section("Wallet");
    output::field("Name", &report.wallet.get().name);
    output::field("Local", report.wallet.label());
    output::field("Node", report.node_wallet.as_str());

    output::section("Secure messaging");
    for binding in &report.registered {
        output::success(&format!(
            "registered {} {}",
            binding.address,
            output::muted(&binding.public_key)
        ));
    }
    for address in &report.rejected {
        output::warning(&format!("key for {address} was rejected and not registered"));
    }

    if report.is_complete() {
        output::success("market ready");
    } else {
        output::hint("fix the rejected key and run bootstrap again");
    }
}
