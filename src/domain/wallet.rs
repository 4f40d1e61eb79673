//! Local wallet bookkeeping.

use serde::{Deserialize, Serialize};

use super::id::{ProfileId, WalletId};

/// Wallet name used by the default marketplace of every profile.
pub const DEFAULT_MARKET_WALLET: &str = "market.dat";

/// A wallet known to local persistence. `name` is the node's wallet identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wallet {
    pub id: WalletId,
    pub profile_id: ProfileId,
    pub name: String,
}

/// Request to create a local wallet row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletCreateRequest {
    pub profile_id: ProfileId,
    pub name: String,
}

/// Wallet details returned by the node after creation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WalletInfo {
    pub name: String,
    #[serde(default)]
    pub warning: Option<String>,
}
