//! Wallet lifecycle on a Particl node.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use super::rpc::{RpcClient, RpcError, Scope};
use crate::domain::{WalletCreation, WalletInfo, WalletLoad};
use crate::error::{BootstrapError, Result};
use crate::port::outbound::node::WalletNode;

#[derive(Deserialize)]
struct WalletDir {
    #[serde(default)]
    wallets: Vec<WalletDirEntry>,
}

#[derive(Deserialize)]
struct WalletDirEntry {
    name: String,
}

impl WalletDir {
    fn contains(&self, name: &str) -> bool {
        self.wallets.iter().any(|w| w.name == name)
    }
}

fn node_error(method: &str, err: RpcError) -> crate::error::Error {
    BootstrapError::ExternalNode(format!("{method}: {err}")).into()
}

/// [`WalletNode`] backed by the node's JSON-RPC interface.
pub struct ParticlNode {
    rpc: Arc<RpcClient>,
}

impl ParticlNode {
    pub fn new(rpc: Arc<RpcClient>) -> Self {
        Self { rpc }
    }

    async fn call<T: serde::de::DeserializeOwned>(&self, method: &str, params: &[Value]) -> Result<T> {
        self.rpc
            .call(Scope::Node, method, params)
            .await
            .map_err(|e| node_error(method, e))
    }
}

#[async_trait]
impl WalletNode for ParticlNode {
    async fn wallet_exists(&self, name: &str) -> Result<bool> {
        let dir: WalletDir = self.call("listwalletdir", &[]).await?;
        Ok(dir.contains(name))
    }

    async fn create_and_load_wallet(&self, name: &str) -> Result<WalletCreation<WalletInfo>> {
        match self
            .rpc
            .call::<WalletInfo>(Scope::Node, "createwallet", &[json!(name)])
            .await
        {
            Ok(info) => Ok(WalletCreation::Created(info)),
            Err(err) if err.is_already_exists() => {
                debug!(wallet = name, error = %err, "createwallet reported existing wallet");
                Ok(WalletCreation::AlreadyExists)
            }
            Err(err) => Err(node_error("createwallet", err)),
        }
    }

    async fn wallet_loaded(&self, name: &str) -> Result<bool> {
        let loaded: Vec<String> = self.call("listwallets", &[]).await?;
        Ok(loaded.iter().any(|w| w == name))
    }

    async fn load_wallet(&self, name: &str) -> Result<WalletLoad> {
        match self
            .rpc
            .call::<Value>(Scope::Node, "loadwallet", &[json!(name)])
            .await
        {
            Ok(_) => Ok(WalletLoad::Loaded),
            Err(err) if err.is_already_loaded() => {
                debug!(wallet = name, error = %err, "loadwallet reported loaded wallet");
                Ok(WalletLoad::AlreadyLoaded)
            }
            Err(err) => Err(node_error("loadwallet", err)),
        }
    }

    async fn set_active_wallet(&self, name: &str) -> Result<()> {
        // Multiwallet nodes keep no selection; check the wallet endpoint answers.
        let _: Value = self
            .rpc
            .call(Scope::Wallet(name), "getwalletinfo", &[])
            .await
            .map_err(|e| node_error("getwalletinfo", e))?;
        Ok(())
    }
}
