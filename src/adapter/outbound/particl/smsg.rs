//! Secure-messaging calls on a Particl node.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use super::rpc::{RpcClient, RpcError, Scope};
use crate::domain::{Address, KeyBinding, PrivateKey, PublicKey};
use crate::error::{BootstrapError, Result};
use crate::port::outbound::messaging::SecureMessaging;

#[derive(Deserialize)]
struct LocalKeys {
    #[serde(default)]
    smsg_keys: Vec<LocalKey>,
}

#[derive(Deserialize)]
struct LocalKey {
    address: String,
    public_key: String,
}

impl From<LocalKey> for KeyBinding {
    fn from(key: LocalKey) -> Self {
        KeyBinding::new(key.address, key.public_key.as_str())
    }
}

fn messaging_error(method: &str, err: RpcError) -> crate::error::Error {
    BootstrapError::Messaging(format!("{method}: {err}")).into()
}

/// [`SecureMessaging`] backed by the node's `smsg*` RPC calls.
///
/// Key and address calls go to the wallet endpoint named by the caller.
pub struct ParticlMessaging {
    rpc: Arc<RpcClient>,
}

impl ParticlMessaging {
    pub fn new(rpc: Arc<RpcClient>) -> Self {
        Self { rpc }
    }

    async fn call<T: serde::de::DeserializeOwned>(
        &self,
        scope: Scope<'_>,
        method: &str,
        params: &[Value],
    ) -> Result<T> {
        self.rpc
            .call(scope, method, params)
            .await
            .map_err(|e| messaging_error(method, e))
    }
}

#[async_trait]
impl SecureMessaging for ParticlMessaging {
    async fn import_private_key(&self, wallet: &str, key: &PrivateKey) -> Result<bool> {
        match self
            .rpc
            .call::<Value>(
                Scope::Wallet(wallet),
                "smsgimportprivkey",
                &[json!(key.expose())],
            )
            .await
        {
            Ok(_) => Ok(true),
            Err(err) if err.is_key_rejected() => {
                debug!(wallet, error = %err, "smsgimportprivkey refused key");
                Ok(false)
            }
            Err(err) => Err(messaging_error("smsgimportprivkey", err)),
        }
    }

    async fn list_local_keys(&self, wallet: &str) -> Result<Vec<KeyBinding>> {
        let keys: LocalKeys = self
            .call(Scope::Wallet(wallet), "smsglocalkeys", &[])
            .await?;
        Ok(keys.smsg_keys.into_iter().map(KeyBinding::from).collect())
    }

    async fn add_address(
        &self,
        wallet: &str,
        address: &Address,
        public_key: &PublicKey,
    ) -> Result<()> {
        let _: Value = self
            .call(
                Scope::Wallet(wallet),
                "smsgaddaddress",
                &[json!(address.as_str()), json!(public_key.as_str())],
            )
            .await?;
        Ok(())
    }

    async fn set_active_wallet(&self, name: &str) -> Result<()> {
        let _: Value = self
            .call(Scope::Node, "smsgsetwallet", &[json!(name)])
            .await?;
        Ok(())
    }
}
