//! Builders for domain primitives used across tests.

use crate::domain::setting::{
    DEFAULT_MARKETPLACE_ADDRESS, DEFAULT_MARKETPLACE_NAME, DEFAULT_MARKETPLACE_PRIVATE_KEY,
};
use crate::domain::{Address, MarketDraft, MarketType, PrivateKey, ProfileId};

use super::store::MemoryStore;

/// Profile used by most tests.
pub const PROFILE: ProfileId = ProfileId::new(1);

/// Settings of the canonical "Alice Market" scenario.
pub fn alice_settings() -> [(&'static str, &'static str); 3] {
    [
        (DEFAULT_MARKETPLACE_NAME, "Alice Market"),
        (DEFAULT_MARKETPLACE_PRIVATE_KEY, "K1"),
        (DEFAULT_MARKETPLACE_ADDRESS, "A1"),
    ]
}

/// Memory store seeded with the given settings for `profile`.
pub fn store_with(profile: ProfileId, settings: &[(&str, &str)]) -> MemoryStore {
    settings
        .iter()
        .fold(MemoryStore::new(), |store, (key, value)| {
            store.with_setting(profile, key, value)
        })
}

/// Storefront draft with separate receive and publish keys.
pub fn storefront_draft(
    receive: (&str, &str),
    publish: (&str, &str),
) -> MarketDraft {
    MarketDraft {
        name: "Storefront".to_string(),
        market_type: MarketType::Storefront,
        receive_key: PrivateKey::from(receive.0),
        receive_address: Address::from(receive.1),
        publish_key: Some(PrivateKey::from(publish.0)),
        publish_address: Some(Address::from(publish.1)),
    }
}
