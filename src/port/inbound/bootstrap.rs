//! Market bootstrap use case.

use async_trait::async_trait;

use crate::domain::{
    Address, KeyBinding, Market, MarketDraft, NodeWalletState, ProfileId, Provisioned, Wallet,
};
use crate::error::Result;

/// Summary of one completed reconciliation pass.
#[derive(Debug, Clone)]
pub struct BootstrapReport {
    /// The market as re-read from the store after every step.
    pub market: Market,
    /// Whether the market row was created or overwritten in place.
    pub market_outcome: Provisioned<()>,
    /// Local wallet row backing the market.
    pub wallet: Provisioned<Wallet>,
    /// What the node had to do to get the wallet ready.
    pub node_wallet: NodeWalletState,
    /// Address/public-key pairs registered with secure messaging.
    pub registered: Vec<KeyBinding>,
    /// Addresses whose private key import was rejected and skipped.
    pub rejected: Vec<Address>,
}

impl BootstrapReport {
    /// True when every key was imported and registered.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Entry point used by startup code and the CLI.
#[async_trait]
pub trait MarketBootstrap: Send + Sync {
    /// Seed the default market of a profile from its settings.
    async fn seed_default_market(&self, profile: ProfileId) -> Result<BootstrapReport>;

    /// Reconcile an arbitrary market into the named wallet.
    async fn reconcile_market(
        &self,
        profile: ProfileId,
        wallet_name: &str,
        draft: MarketDraft,
    ) -> Result<BootstrapReport>;
}
