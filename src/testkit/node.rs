//! Recording [`WalletNode`] fake.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::{WalletCreation, WalletInfo, WalletLoad};
use crate::error::{BootstrapError, Result};
use crate::port::outbound::node::WalletNode;

/// A node call, recorded in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeCall {
    WalletExists(String),
    CreateAndLoadWallet(String),
    WalletLoaded(String),
    LoadWallet(String),
    SetActiveWallet(String),
}

#[derive(Default)]
struct NodeState {
    /// Wallet name -> loaded.
    wallets: HashMap<String, bool>,
    active: Option<String>,
    racing_create: bool,
    racing_load: bool,
    unreachable: Option<String>,
}

/// In-memory node that records every call.
///
/// Behaviour is scripted with the `with_*` / `racing_*` builders:
/// a racing create reports `AlreadyExists`, a racing load reports
/// `AlreadyLoaded`, and an unreachable node fails every call.
#[derive(Default)]
pub struct RecordingNode {
    state: Mutex<NodeState>,
    calls: Mutex<Vec<NodeCall>>,
}

impl RecordingNode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-existing wallet on the node.
    pub fn with_wallet(self, name: &str, loaded: bool) -> Self {
        self.state.lock().wallets.insert(name.to_string(), loaded);
        self
    }

    /// Hide wallets from `wallet_exists` and report `AlreadyExists` on create.
    pub fn racing_create(self) -> Self {
        self.state.lock().racing_create = true;
        self
    }

    /// Report `AlreadyLoaded` on load.
    pub fn racing_load(self) -> Self {
        self.state.lock().racing_load = true;
        self
    }

    /// Fail every call with an external node error.
    pub fn unreachable(self, reason: &str) -> Self {
        self.state.lock().unreachable = Some(reason.to_string());
        self
    }

    /// Bring an unreachable node back.
    pub fn heal(&self) {
        self.state.lock().unreachable = None;
    }

    pub fn calls(&self) -> Vec<NodeCall> {
        self.calls.lock().clone()
    }

    /// Number of recorded calls matching `pred`.
    pub fn count(&self, pred: impl Fn(&NodeCall) -> bool) -> usize {
        self.calls.lock().iter().filter(|c| pred(c)).count()
    }

    pub fn active_wallet(&self) -> Option<String> {
        self.state.lock().active.clone()
    }

    pub fn is_loaded(&self, name: &str) -> bool {
        self.state.lock().wallets.get(name).copied().unwrap_or(false)
    }

    fn record(&self, call: NodeCall) -> Result<()> {
        self.calls.lock().push(call);
        match &self.state.lock().unreachable {
            Some(reason) => Err(BootstrapError::ExternalNode(reason.clone()).into()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl WalletNode for RecordingNode {
    async fn wallet_exists(&self, name: &str) -> Result<bool> {
        self.record(NodeCall::WalletExists(name.to_string()))?;
        let state = self.state.lock();
        Ok(!state.racing_create && state.wallets.contains_key(name))
    }

    async fn create_and_load_wallet(&self, name: &str) -> Result<WalletCreation<WalletInfo>> {
        self.record(NodeCall::CreateAndLoadWallet(name.to_string()))?;
        let mut state = self.state.lock();
        if state.racing_create || state.wallets.contains_key(name) {
            state.wallets.insert(name.to_string(), true);
            return Ok(WalletCreation::AlreadyExists);
        }
        state.wallets.insert(name.to_string(), true);
        Ok(WalletCreation::Created(WalletInfo {
            name: name.to_string(),
            warning: None,
        }))
    }

    async fn wallet_loaded(&self, name: &str) -> Result<bool> {
        self.record(NodeCall::WalletLoaded(name.to_string()))?;
        Ok(self.is_loaded(name))
    }

    async fn load_wallet(&self, name: &str) -> Result<WalletLoad> {
        self.record(NodeCall::LoadWallet(name.to_string()))?;
        let mut state = self.state.lock();
        let racing = state.racing_load;
        state.wallets.insert(name.to_string(), true);
        Ok(if racing {
            WalletLoad::AlreadyLoaded
        } else {
            WalletLoad::Loaded
        })
    }

    async fn set_active_wallet(&self, name: &str) -> Result<()> {
        self.record(NodeCall::SetActiveWallet(name.to_string()))?;
        self.state.lock().active = Some(name.to_string());
        Ok(())
    }
}
