//! Resolution of the settings that seed a default market.

use std::sync::Arc;

use crate::domain::setting::REQUIRED_MARKET_SETTINGS;
use crate::domain::{Address, DefaultMarketSettings, PrivateKey, ProfileId};
use crate::error::{BootstrapError, Result};
use crate::port::outbound::store::SettingStore;

/// Reads the profile settings a default market is built from.
pub struct SettingsResolver {
    store: Arc<dyn SettingStore>,
}

impl SettingsResolver {
    pub fn new(store: Arc<dyn SettingStore>) -> Self {
        Self { store }
    }

    /// Return name, private key and address of the default marketplace.
    ///
    /// # Errors
    ///
    /// `ConfigurationMissing` listing every absent key. Nothing else is
    /// touched when this fails.
    pub async fn resolve(&self, profile: ProfileId) -> Result<DefaultMarketSettings> {
        let settings = self.store.find_all_by_profile(profile).await?;
        let lookup = |key: &str| {
            settings
                .iter()
                .find(|s| s.key == key)
                .map(|s| s.value.clone())
        };

        match REQUIRED_MARKET_SETTINGS.map(lookup) {
            [Some(name), Some(key), Some(address)] => Ok(DefaultMarketSettings {
                name,
                private_key: PrivateKey::new(key),
                address: Address::new(address),
            }),
            values => {
                let missing = REQUIRED_MARKET_SETTINGS
                    .into_iter()
                    .zip(values)
                    .filter_map(|(key, value)| value.is_none().then_some(key))
                    .collect();
                Err(BootstrapError::ConfigurationMissing { profile, missing }.into())
            }
        }
    }
}
