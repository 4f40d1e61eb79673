//! Wallet provisioning across local persistence and the node.

use std::sync::Arc;

use tracing::debug;

use crate::domain::{
    NodeWalletState, ProfileId, Provisioned, Wallet, WalletCreateRequest, WalletCreation,
    WalletLoad,
};
use crate::error::Result;
use crate::port::outbound::node::WalletNode;
use crate::port::outbound::store::WalletStore;

/// Makes sure a named wallet exists locally, exists and is loaded on the
/// node, and is the node's active wallet.
pub struct WalletProvisioner {
    wallets: Arc<dyn WalletStore>,
    node: Arc<dyn WalletNode>,
}

impl WalletProvisioner {
    pub fn new(wallets: Arc<dyn WalletStore>, node: Arc<dyn WalletNode>) -> Self {
        Self { wallets, node }
    }

    /// Find the local wallet row for `(profile, name)`, creating it if absent.
    pub async fn resolve_local(&self, profile: ProfileId, name: &str) -> Result<Provisioned<Wallet>> {
        if let Some(wallet) = self.wallets.find_by_name(profile, name).await? {
            return Ok(Provisioned::AlreadyExisted(wallet));
        }

        let wallet = self
            .wallets
            .create(&WalletCreateRequest {
                profile_id: profile,
                name: name.to_string(),
            })
            .await?;
        debug!(wallet = %wallet.name, id = %wallet.id, "created local wallet");
        Ok(Provisioned::Created(wallet))
    }

    /// Create or load the wallet on the node, then make it the active wallet.
    ///
    /// Activation is not persisted by the node, so it happens on every call.
    pub async fn ensure_on_node(&self, name: &str) -> Result<NodeWalletState> {
        let exists = self.node.wallet_exists(name).await?;
        debug!(wallet = name, exists, "checked node wallet");

        let state = if !exists {
            match self.node.create_and_load_wallet(name).await? {
                WalletCreation::Created(info) => {
                    debug!(wallet = %info.name, "created node wallet");
                    NodeWalletState::Created
                }
                WalletCreation::AlreadyExists => {
                    debug!(wallet = name, "node wallet already exists");
                    NodeWalletState::AlreadyExisted
                }
            }
        } else if self.node.wallet_loaded(name).await? {
            NodeWalletState::Ready
        } else {
            match self.node.load_wallet(name).await? {
                WalletLoad::Loaded => NodeWalletState::Loaded,
                WalletLoad::AlreadyLoaded => {
                    debug!(wallet = name, "node wallet already loaded");
                    NodeWalletState::AlreadyLoaded
                }
            }
        };

        self.node.set_active_wallet(name).await?;
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BootstrapError;
    use crate::testkit::domain::PROFILE;
    use crate::testkit::node::{NodeCall, RecordingNode};
    use crate::testkit::store::MemoryStore;

    const WALLET: &str = "market.dat";

    fn provisioner(node: &Arc<RecordingNode>) -> WalletProvisioner {
        WalletProvisioner::new(Arc::new(MemoryStore::new()), node.clone())
    }

    #[tokio::test]
    async fn local_wallet_created_once_per_profile_and_name() {
        let store = Arc::new(MemoryStore::new());
        let provisioner = WalletProvisioner::new(store.clone(), Arc::new(RecordingNode::new()));

        let first = provisioner.resolve_local(PROFILE, WALLET).await.unwrap();
        let second = provisioner.resolve_local(PROFILE, WALLET).await.unwrap();
        let other = provisioner.resolve_local(ProfileId::new(2), WALLET).await.unwrap();

        assert!(first.was_created());
        assert!(!second.was_created());
        assert_eq!(first.get().id, second.get().id);
        assert!(other.was_created());
        assert_eq!(store.wallet_creates(), 2);
    }

    #[tokio::test]
    async fn missing_wallet_is_created_and_activated() {
        let node = Arc::new(RecordingNode::new());
        let state = provisioner(&node).ensure_on_node(WALLET).await.unwrap();

        assert_eq!(state, NodeWalletState::Created);
        assert_eq!(
            node.calls(),
            vec![
                NodeCall::WalletExists(WALLET.into()),
                NodeCall::CreateAndLoadWallet(WALLET.into()),
                NodeCall::SetActiveWallet(WALLET.into()),
            ]
        );
    }

    #[tokio::test]
    async fn already_exists_on_create_is_success() {
        let node = Arc::new(RecordingNode::new().racing_create());
        let state = provisioner(&node).ensure_on_node(WALLET).await.unwrap();

        assert_eq!(state, NodeWalletState::AlreadyExisted);
        assert_eq!(node.active_wallet().as_deref(), Some(WALLET));
    }

    #[tokio::test]
    async fn existing_unloaded_wallet_is_loaded_not_created() {
        let node = Arc::new(RecordingNode::new().with_wallet(WALLET, false));
        let state = provisioner(&node).ensure_on_node(WALLET).await.unwrap();

        assert_eq!(state, NodeWalletState::Loaded);
        assert_eq!(node.count(|c| matches!(c, NodeCall::CreateAndLoadWallet(_))), 0);
        assert_eq!(node.count(|c| matches!(c, NodeCall::LoadWallet(_))), 1);
        assert!(node.is_loaded(WALLET));
    }

    #[tokio::test]
    async fn already_loaded_on_load_is_success() {
        let node = Arc::new(RecordingNode::new().with_wallet(WALLET, false).racing_load());
        let state = provisioner(&node).ensure_on_node(WALLET).await.unwrap();
        assert_eq!(state, NodeWalletState::AlreadyLoaded);
    }

    #[tokio::test]
    async fn loaded_wallet_is_only_activated() {
        let node = Arc::new(RecordingNode::new().with_wallet(WALLET, true));
        let state = provisioner(&node).ensure_on_node(WALLET).await.unwrap();

        assert_eq!(state, NodeWalletState::Ready);
        assert_eq!(
            node.calls(),
            vec![
                NodeCall::WalletExists(WALLET.into()),
                NodeCall::WalletLoaded(WALLET.into()),
                NodeCall::SetActiveWallet(WALLET.into()),
            ]
        );
    }

    #[tokio::test]
    async fn node_failure_propagates_without_retry() {
        let node = Arc::new(RecordingNode::new().unreachable("connection refused"));
        let err = provisioner(&node).ensure_on_node(WALLET).await.unwrap_err();

        assert_eq!(
            err.as_bootstrap(),
            Some(&BootstrapError::ExternalNode("connection refused".into()))
        );
        assert_eq!(node.calls().len(), 1);
    }
}
