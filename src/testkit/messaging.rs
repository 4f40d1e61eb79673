//! Recording [`SecureMessaging`] fake.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::{Address, KeyBinding, PrivateKey, PublicKey};
use crate::error::{BootstrapError, Result};
use crate::port::outbound::messaging::SecureMessaging;

/// A messaging call, recorded in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessagingCall {
    ImportPrivateKey(String),
    ListLocalKeys,
    AddAddress(Address, PublicKey),
    SetActiveWallet(String),
}

#[derive(Default)]
struct MessagingState {
    /// Private key -> binding it derives once imported.
    derivations: HashMap<String, KeyBinding>,
    rejected: HashSet<String>,
    local: Vec<KeyBinding>,
    registered: Vec<KeyBinding>,
    /// Key and address calls with the wallet they named, in order.
    scoped: Vec<(String, MessagingCall)>,
    active: Option<String>,
    unreachable: Option<String>,
}

/// In-memory secure-messaging subsystem that records every call.
///
/// Importing a key registered with [`with_key`](Self::with_key) makes its
/// binding appear in `list_local_keys`. Importing any other key succeeds
/// without listing anything.
#[derive(Default)]
pub struct RecordingMessaging {
    state: Mutex<MessagingState>,
    calls: Mutex<Vec<MessagingCall>>,
}

impl RecordingMessaging {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key whose import lists `(address, public_key)` as a local key.
    pub fn with_key(self, private_key: &str, address: &str, public_key: &str) -> Self {
        self.state.lock().derivations.insert(
            private_key.to_string(),
            KeyBinding::new(address, public_key),
        );
        self
    }

    /// Key whose import returns `false`.
    pub fn rejecting(self, private_key: &str) -> Self {
        self.state.lock().rejected.insert(private_key.to_string());
        self
    }

    pub fn unreachable(self, reason: &str) -> Self {
        self.state.lock().unreachable = Some(reason.to_string());
        self
    }

    /// Bring an unreachable subsystem back.
    pub fn heal(&self) {
        self.state.lock().unreachable = None;
    }

    pub fn calls(&self) -> Vec<MessagingCall> {
        self.calls.lock().clone()
    }

    pub fn count(&self, pred: impl Fn(&MessagingCall) -> bool) -> usize {
        self.calls.lock().iter().filter(|c| pred(c)).count()
    }

    /// Bindings currently registered, without duplicates.
    pub fn registered(&self) -> Vec<KeyBinding> {
        self.state.lock().registered.clone()
    }

    pub fn active_wallet(&self) -> Option<String> {
        self.state.lock().active.clone()
    }

    /// Wallets named by key and address calls, in call order.
    pub fn wallets_used(&self) -> Vec<String> {
        self.state
            .lock()
            .scoped
            .iter()
            .map(|(wallet, _)| wallet.clone())
            .collect()
    }

    /// Key and address calls that named `wallet`.
    pub fn calls_in(&self, wallet: &str) -> Vec<MessagingCall> {
        self.state
            .lock()
            .scoped
            .iter()
            .filter(|(name, _)| name == wallet)
            .map(|(_, call)| call.clone())
            .collect()
    }

    fn record_in(&self, wallet: &str, call: MessagingCall) -> Result<()> {
        self.state
            .lock()
            .scoped
            .push((wallet.to_string(), call.clone()));
        self.record(call)
    }

    fn record(&self, call: MessagingCall) -> Result<()> {
        self.calls.lock().push(call);
        match &self.state.lock().unreachable {
            Some(reason) => Err(BootstrapError::Messaging(reason.clone()).into()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl SecureMessaging for RecordingMessaging {
    async fn import_private_key(&self, wallet: &str, key: &PrivateKey) -> Result<bool> {
        self.record_in(wallet, MessagingCall::ImportPrivateKey(key.expose().to_string()))?;
        let mut state = self.state.lock();
        if state.rejected.contains(key.expose()) {
            return Ok(false);
        }
        if let Some(binding) = state.derivations.get(key.expose()).cloned() {
            if !state.local.contains(&binding) {
                state.local.push(binding);
            }
        }
        Ok(true)
    }

    async fn list_local_keys(&self, wallet: &str) -> Result<Vec<KeyBinding>> {
        self.record_in(wallet, MessagingCall::ListLocalKeys)?;
        Ok(self.state.lock().local.clone())
    }

    async fn add_address(
        &self,
        wallet: &str,
        address: &Address,
        public_key: &PublicKey,
    ) -> Result<()> {
        self.record_in(
            wallet,
            MessagingCall::AddAddress(address.clone(), public_key.clone()),
        )?;
        let binding = KeyBinding::new(address.clone(), public_key.clone());
        let mut state = self.state.lock();
        if !state.registered.contains(&binding) {
            state.registered.push(binding);
        }
        Ok(())
    }

    async fn set_active_wallet(&self, name: &str) -> Result<()> {
        self.record(MessagingCall::SetActiveWallet(name.to_string()))?;
        self.state.lock().active = Some(name.to_string());
        Ok(())
    }
}
