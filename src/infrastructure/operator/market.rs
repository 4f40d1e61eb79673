//! Market listing operator implementation.

use async_trait::async_trait;

use crate::domain::{Market, ProfileId};
use crate::error::Result;
use crate::infrastructure::bootstrap::open_store;
use crate::infrastructure::config::settings::Config;
use crate::port::inbound::operator::market::MarketOperator;
use crate::port::outbound::store::MarketStore;

use super::entry::Operator;

#[async_trait]
impl MarketOperator for Operator {
    async fn list_markets(&self, config_toml: &str, profile: ProfileId) -> Result<Vec<Market>> {
        let config = Config::parse_toml(config_toml)?;
        let store = open_store(&config.database)?;
        store.list_by_profile(profile).await
    }
}
