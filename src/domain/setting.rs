//! Profile-scoped settings.

use serde::{Deserialize, Serialize};

use super::id::{Address, ProfileId};
use super::key::PrivateKey;

/// Setting key holding the display name of the default marketplace.
pub const DEFAULT_MARKETPLACE_NAME: &str = "DEFAULT_MARKETPLACE_NAME";
/// Setting key holding the private key of the default marketplace.
pub const DEFAULT_MARKETPLACE_PRIVATE_KEY: &str = "DEFAULT_MARKETPLACE_PRIVATE_KEY";
/// Setting key holding the receive/publish address of the default marketplace.
pub const DEFAULT_MARKETPLACE_ADDRESS: &str = "DEFAULT_MARKETPLACE_ADDRESS";

/// Keys that must all be present before a default market can be seeded.
pub const REQUIRED_MARKET_SETTINGS: [&str; 3] = [
    DEFAULT_MARKETPLACE_NAME,
    DEFAULT_MARKETPLACE_PRIVATE_KEY,
    DEFAULT_MARKETPLACE_ADDRESS,
];

/// A named configuration value owned by a profile. Keys are unique per profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Setting {
    pub profile_id: ProfileId,
    pub key: String,
    pub value: String,
}

/// The three settings needed to seed the default market of a profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultMarketSettings {
    pub name: String,
    pub private_key: PrivateKey,
    pub address: Address,
}
