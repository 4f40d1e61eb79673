//! External wallet node port.

use async_trait::async_trait;

use crate::domain::{WalletCreation, WalletInfo, WalletLoad};
use crate::error::Result;

/// Wallet lifecycle on the external node.
///
/// "Already exists" and "already loaded" are typed outcomes. Anything else
/// the node reports is an error and is not retried.
#[async_trait]
pub trait WalletNode: Send + Sync {
    /// Whether the node knows a wallet with this name (loaded or not).
    async fn wallet_exists(&self, name: &str) -> Result<bool>;

    /// Create a wallet and load it.
    async fn create_and_load_wallet(&self, name: &str) -> Result<WalletCreation<WalletInfo>>;

    /// Whether the wallet is currently loaded.
    async fn wallet_loaded(&self, name: &str) -> Result<bool>;

    async fn load_wallet(&self, name: &str) -> Result<WalletLoad>;

    /// Make this wallet the active one for the pass. Fails if the node
    /// cannot serve calls scoped to it.
    async fn set_active_wallet(&self, name: &str) -> Result<()>;
}
