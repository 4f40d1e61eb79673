//! Secure-messaging subsystem port.

use async_trait::async_trait;

use crate::domain::{Address, KeyBinding, PrivateKey, PublicKey};
use crate::error::Result;

/// Secure-messaging subsystem of the node.
///
/// Key and address calls name the wallet they act on, so passes over
/// different wallets never share a selection.
#[async_trait]
pub trait SecureMessaging: Send + Sync {
    /// Import a private key. `Ok(false)` means the subsystem refused the key;
    /// every other failure is an error.
    async fn import_private_key(&self, wallet: &str, key: &PrivateKey) -> Result<bool>;

    /// Keys currently known to the subsystem. Re-queried on every call.
    async fn list_local_keys(&self, wallet: &str) -> Result<Vec<KeyBinding>>;

    /// Bind an address to its public key. Binding a known pair is a no-op.
    async fn add_address(
        &self,
        wallet: &str,
        address: &Address,
        public_key: &PublicKey,
    ) -> Result<()>;

    /// Select the wallet secure messages are associated with.
    async fn set_active_wallet(&self, name: &str) -> Result<()>;
}
