//! Secure-messaging registration.

use std::sync::Arc;

use tracing::debug;

use crate::domain::KeyBinding;
use crate::error::Result;
use crate::port::outbound::messaging::SecureMessaging;

/// Binds addresses into secure messaging and selects its wallet.
pub struct MessagingRegistrar {
    messaging: Arc<dyn SecureMessaging>,
}

impl MessagingRegistrar {
    pub fn new(messaging: Arc<dyn SecureMessaging>) -> Self {
        Self { messaging }
    }

    /// Bind an address to its public key in `wallet`. Re-binding a known
    /// pair is a no-op on the subsystem side.
    pub async fn register(&self, wallet: &str, binding: &KeyBinding) -> Result<()> {
        self.messaging
            .add_address(wallet, &binding.address, &binding.public_key)
            .await?;
        debug!(address = %binding.address, wallet, "registered market address");
        Ok(())
    }

    pub async fn set_active_wallet(&self, name: &str) -> Result<()> {
        self.messaging.set_active_wallet(name).await
    }
}
