//! Private key import and public key resolution.

use std::sync::Arc;

use tracing::{debug, error};

use super::config::KeyRejectionPolicy;
use crate::domain::{Address, PrivateKey, PublicKey};
use crate::error::{BootstrapError, Result};
use crate::port::outbound::messaging::SecureMessaging;

/// Imports keys into secure messaging and finds the public key of an address.
pub struct KeyImporter {
    messaging: Arc<dyn SecureMessaging>,
    policy: KeyRejectionPolicy,
}

impl KeyImporter {
    pub fn new(messaging: Arc<dyn SecureMessaging>, policy: KeyRejectionPolicy) -> Self {
        Self { messaging, policy }
    }

    /// Import `key` into `wallet` and return the public key listed for
    /// `address`.
    ///
    /// Returns `Ok(None)` when the import is rejected under
    /// [`KeyRejectionPolicy::Continue`].
    ///
    /// # Errors
    ///
    /// - `KeyImportRejected` when the import is rejected under
    ///   [`KeyRejectionPolicy::Abort`].
    /// - `InternalInconsistency` when the import succeeded but no local key
    ///   carries `address`.
    pub async fn import_and_resolve(
        &self,
        wallet: &str,
        key: &PrivateKey,
        address: &Address,
    ) -> Result<Option<PublicKey>> {
        if !self.messaging.import_private_key(wallet, key).await? {
            return match self.policy {
                KeyRejectionPolicy::Continue => {
                    error!(%address, wallet, "error while importing market private key");
                    Ok(None)
                }
                KeyRejectionPolicy::Abort => Err(BootstrapError::KeyImportRejected {
                    address: address.to_string(),
                }
                .into()),
            };
        }

        match self.public_key_for(wallet, address).await? {
            Some(public_key) => {
                debug!(%address, %public_key, "resolved market public key");
                Ok(Some(public_key))
            }
            None => Err(BootstrapError::InternalInconsistency {
                address: address.to_string(),
            }
            .into()),
        }
    }

    async fn public_key_for(&self, wallet: &str, address: &Address) -> Result<Option<PublicKey>> {
        let keys = self.messaging.list_local_keys(wallet).await?;
        Ok(keys
            .into_iter()
            .find(|binding| &binding.address == address)
            .map(|binding| binding.public_key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::messaging::{MessagingCall, RecordingMessaging};

    const WALLET: &str = "market.dat";

    fn importer(messaging: &Arc<RecordingMessaging>, policy: KeyRejectionPolicy) -> KeyImporter {
        KeyImporter::new(messaging.clone(), policy)
    }

    #[tokio::test]
    async fn resolves_public_key_after_import() {
        let messaging = Arc::new(RecordingMessaging::new().with_key("K1", "A1", "PUB1"));
        let public_key = importer(&messaging, KeyRejectionPolicy::Continue)
            .import_and_resolve(WALLET, &PrivateKey::from("K1"), &Address::from("A1"))
            .await
            .unwrap();

        assert_eq!(public_key, Some(PublicKey::from("PUB1")));
        assert_eq!(
            messaging.calls(),
            vec![
                MessagingCall::ImportPrivateKey("K1".into()),
                MessagingCall::ListLocalKeys,
            ]
        );
        assert_eq!(messaging.wallets_used(), vec![WALLET, WALLET]);
    }

    #[tokio::test]
    async fn rejected_import_continues_without_key() {
        let messaging = Arc::new(RecordingMessaging::new().rejecting("K1"));
        let public_key = importer(&messaging, KeyRejectionPolicy::Continue)
            .import_and_resolve(WALLET, &PrivateKey::from("K1"), &Address::from("A1"))
            .await
            .unwrap();

        assert_eq!(public_key, None);
        assert_eq!(messaging.count(|c| *c == MessagingCall::ListLocalKeys), 0);
    }

    struct Capture(Arc<parking_lot::Mutex<Vec<u8>>>);

    impl std::io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn rejection_log_names_the_address_only() {
        let logs = Arc::new(parking_lot::Mutex::new(Vec::new()));
        let writer = {
            let logs = Arc::clone(&logs);
            move || Capture(Arc::clone(&logs))
        };
        let subscriber = tracing_subscriber::fmt()
            .with_writer(writer)
            .with_ansi(false)
            .with_max_level(tracing::Level::TRACE)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let messaging = Arc::new(RecordingMessaging::new().rejecting("7tXpSecretWif"));
        importer(&messaging, KeyRejectionPolicy::Continue)
            .import_and_resolve(WALLET, &PrivateKey::from("7tXpSecretWif"), &Address::from("A1"))
            .await
            .unwrap();

        let output = String::from_utf8_lossy(&logs.lock()).to_string();
        assert!(output.contains("error while importing market private key"));
        assert!(output.contains("A1"));
        assert!(!output.contains("7tXp"));
    }

    #[tokio::test]
    async fn rejected_import_aborts_under_abort_policy() {
        let messaging = Arc::new(RecordingMessaging::new().rejecting("K1"));
        let err = importer(&messaging, KeyRejectionPolicy::Abort)
            .import_and_resolve(WALLET, &PrivateKey::from("K1"), &Address::from("A1"))
            .await
            .unwrap_err();

        assert_eq!(
            err.as_bootstrap(),
            Some(&BootstrapError::KeyImportRejected {
                address: "A1".into()
            })
        );
    }

    #[tokio::test]
    async fn unlisted_address_after_import_is_inconsistent() {
        let messaging = Arc::new(RecordingMessaging::new().with_key("K1", "OTHER", "PUB1"));
        let err = importer(&messaging, KeyRejectionPolicy::Continue)
            .import_and_resolve(WALLET, &PrivateKey::from("K1"), &Address::from("A1"))
            .await
            .unwrap_err();

        assert_eq!(
            err.as_bootstrap(),
            Some(&BootstrapError::InternalInconsistency {
                address: "A1".into()
            })
        );
    }

    #[tokio::test]
    async fn messaging_failure_propagates() {
        let messaging = Arc::new(RecordingMessaging::new().unreachable("socket closed"));
        let err = importer(&messaging, KeyRejectionPolicy::Continue)
            .import_and_resolve(WALLET, &PrivateKey::from("K1"), &Address::from("A1"))
            .await
            .unwrap_err();

        assert_eq!(
            err.as_bootstrap(),
            Some(&BootstrapError::Messaging("socket closed".into()))
        );
    }
}
