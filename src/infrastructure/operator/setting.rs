//! Settings operator implementation.

use async_trait::async_trait;

use crate::domain::{ProfileId, Setting};
use crate::error::Result;
use crate::infrastructure::bootstrap::open_store;
use crate::infrastructure::config::settings::Config;
use crate::port::inbound::operator::setting::SettingOperator;
use crate::port::outbound::store::SettingStore;

use super::entry::Operator;

#[async_trait]
impl SettingOperator for Operator {
    async fn set_setting(
        &self,
        config_toml: &str,
        profile: ProfileId,
        key: &str,
        value: &str,
    ) -> Result<Setting> {
        let config = Config::parse_toml(config_toml)?;
        let store = open_store(&config.database)?;
        store.upsert(profile, key, value).await
    }

    async fn list_settings(&self, config_toml: &str, profile: ProfileId) -> Result<Vec<Setting>> {
        let config = Config::parse_toml(config_toml)?;
        let store = open_store(&config.database)?;
        store.find_all_by_profile(profile).await
    }
}
