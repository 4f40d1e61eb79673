//! Store ports for persistence operations.
//!
//! One trait per entity. Lookups return `Ok(None)` for a miss; errors are
//! reserved for storage failures.

use async_trait::async_trait;

use crate::domain::{
    Address, Market, MarketId, MarketRequest, ProfileId, Setting, Wallet, WalletCreateRequest,
    WalletId,
};
use crate::error::Result;

/// Profile-scoped settings.
#[async_trait]
pub trait SettingStore: Send + Sync {
    /// All settings of a profile.
    async fn find_all_by_profile(&self, profile: ProfileId) -> Result<Vec<Setting>>;

    /// Insert or replace a single setting.
    async fn upsert(&self, profile: ProfileId, key: &str, value: &str) -> Result<Setting>;
}

/// Local wallet rows.
#[async_trait]
pub trait WalletStore: Send + Sync {
    async fn find_one(&self, id: WalletId) -> Result<Option<Wallet>>;

    async fn find_by_name(&self, profile: ProfileId, name: &str) -> Result<Option<Wallet>>;

    /// Create a wallet row.
    ///
    /// # Errors
    ///
    /// Fails if a wallet with the same `(profile, name)` already exists.
    async fn create(&self, request: &WalletCreateRequest) -> Result<Wallet>;
}

/// Market rows.
#[async_trait]
pub trait MarketStore: Send + Sync {
    async fn find_one(&self, id: MarketId) -> Result<Option<Market>>;

    async fn find_by_profile_and_address(
        &self,
        profile: ProfileId,
        receive_address: &Address,
    ) -> Result<Option<Market>>;

    /// Create a market row.
    ///
    /// # Errors
    ///
    /// Fails if a market with the same `(profile, receive_address)` exists.
    async fn create(&self, request: &MarketRequest) -> Result<Market>;

    /// Overwrite every field of an existing market.
    async fn update(&self, id: MarketId, request: &MarketRequest) -> Result<Market>;

    async fn list_by_profile(&self, profile: ProfileId) -> Result<Vec<Market>>;
}
