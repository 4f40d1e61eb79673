//! JSON-RPC transport shared by the node and messaging adapters.
//!
//! Wallet-scoped calls are routed to `<url>/wallet/<name>`. The wallet is
//! named on every call; the client keeps no wallet selection of its own.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::trace;
use url::Url;

use crate::error::{ConfigError, Error, Result};
use crate::infrastructure::config::node::NodeConfig;

/// Generic wallet or database failure, also used for "already exists".
pub const RPC_WALLET_ERROR: i64 = -4;
/// Invalid address or key.
pub const RPC_INVALID_ADDRESS_OR_KEY: i64 = -5;
/// Wallet is already loaded.
pub const RPC_WALLET_ALREADY_LOADED: i64 = -35;

/// Failure of a single RPC call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RpcError {
    #[error("transport: {0}")]
    Transport(String),

    #[error("rpc error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("malformed response: {0}")]
    Decode(String),
}

impl RpcError {
    /// Node refused to create a wallet because it is already there.
    #[must_use]
    pub fn is_already_exists(&self) -> bool {
        match self {
            Self::Rpc { code, message } => {
                *code == RPC_WALLET_ERROR && message.contains("already exists")
            }
            _ => false,
        }
    }

    /// Node refused to load a wallet because it is already loaded.
    #[must_use]
    pub fn is_already_loaded(&self) -> bool {
        match self {
            Self::Rpc { code, message } => {
                *code == RPC_WALLET_ALREADY_LOADED || message.contains("already loaded")
            }
            _ => false,
        }
    }

    /// Node refused a private key it was asked to import.
    ///
    /// Any other remote error (unknown method, wallet not loaded, node still
    /// warming up) is a subsystem failure, not a refusal.
    #[must_use]
    pub fn is_key_rejected(&self) -> bool {
        match self {
            Self::Rpc { code, message } => {
                *code == RPC_INVALID_ADDRESS_OR_KEY
                    || message.to_ascii_lowercase().contains("import failed")
            }
            _ => false,
        }
    }
}

/// Which endpoint a call goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope<'a> {
    Node,
    Wallet(&'a str),
}

#[derive(Serialize)]
struct Request<'a> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: &'a [Value],
}

#[derive(Deserialize)]
struct Envelope {
    #[serde(default)]
    result: Value,
    #[serde(default)]
    error: Option<RemoteError>,
}

#[derive(Deserialize)]
struct RemoteError {
    code: i64,
    message: String,
}

/// Decode a response body into `T`, surfacing the remote error if any.
pub(crate) fn decode<T: DeserializeOwned>(body: &str) -> std::result::Result<T, RpcError> {
    let envelope: Envelope =
        serde_json::from_str(body).map_err(|e| RpcError::Decode(e.to_string()))?;
    if let Some(RemoteError { code, message }) = envelope.error {
        return Err(RpcError::Rpc { code, message });
    }
    serde_json::from_value(envelope.result).map_err(|e| RpcError::Decode(e.to_string()))
}

/// Endpoint for `scope` under the base url.
pub(crate) fn endpoint(base: &Url, scope: Scope<'_>) -> std::result::Result<Url, RpcError> {
    match scope {
        Scope::Node => Ok(base.clone()),
        Scope::Wallet("") => Err(RpcError::Transport(
            "wallet-scoped call with an empty wallet name".into(),
        )),
        Scope::Wallet(name) => {
            let mut url = base.clone();
            url.path_segments_mut()
                .map_err(|()| RpcError::Transport(format!("{base} cannot be a base url")))?
                .pop_if_empty()
                .extend(["wallet", name]);
            Ok(url)
        }
    }
}

/// Particl-style JSON-RPC client.
#[derive(Debug)]
pub struct RpcClient {
    client: Client,
    url: Url,
    user: Option<String>,
    password: Option<String>,
    next_id: AtomicU64,
}

impl RpcClient {
    /// Build a client for the configured node.
    ///
    /// # Errors
    ///
    /// Returns an error if the url is invalid or the HTTP client cannot be built.
    pub fn new(config: &NodeConfig) -> Result<Self> {
        let url = Url::parse(&config.url).map_err(|e| {
            Error::Config(ConfigError::InvalidValue {
                field: "node.url",
                reason: e.to_string(),
            })
        })?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            url,
            user: config.user.clone(),
            password: config.password.clone(),
            next_id: AtomicU64::new(1),
        })
    }

    /// Issue one call and decode its result.
    ///
    /// # Errors
    ///
    /// Returns [`RpcError`] for transport failures, remote errors and
    /// undecodable responses.
    pub async fn call<T: DeserializeOwned>(
        &self,
        scope: Scope<'_>,
        method: &str,
        params: &[Value],
    ) -> std::result::Result<T, RpcError> {
        let url = endpoint(&self.url, scope)?;
        let request = Request {
            jsonrpc: "1.0",
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            method,
            params,
        };
        trace!(method, %url, "rpc call");

        let mut builder = self.client.post(url).json(&request);
        if let Some(user) = &self.user {
            builder = builder.basic_auth(user, self.password.as_deref());
        }
        let response = builder
            .send()
            .await
            .map_err(|e| RpcError::Transport(e.to_string()))?;

        // Remote errors come back as 500 with a JSON body.
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(RpcError::Transport(format!("node rejected credentials ({status})")));
        }
        let body = response
            .text()
            .await
            .map_err(|e| RpcError::Transport(e.to_string()))?;
        decode(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn base() -> Url {
        Url::parse("http://127.0.0.1:51735").unwrap()
    }

    #[test]
    fn decode_returns_result() {
        let names: Vec<String> =
            decode(r#"{"result":["market.dat"],"error":null,"id":1}"#).unwrap();
        assert_eq!(names, vec!["market.dat"]);
    }

    #[test]
    fn decode_null_result_as_unit() {
        let decoded: std::result::Result<(), RpcError> =
            decode(r#"{"result":null,"error":null,"id":1}"#);
        assert!(decoded.is_ok());
    }

    #[test]
    fn decode_surfaces_remote_error() {
        let err = decode::<Value>(
            r#"{"result":null,"error":{"code":-35,"message":"Wallet \"market.dat\" is already loaded."},"id":1}"#,
        )
        .unwrap_err();
        assert_eq!(
            err,
            RpcError::Rpc {
                code: -35,
                message: "Wallet \"market.dat\" is already loaded.".into()
            }
        );
        assert!(err.is_already_loaded());
        assert!(!err.is_already_exists());
    }

    #[test]
    fn decode_rejects_garbage() {
        assert!(matches!(decode::<Value>("<html>"), Err(RpcError::Decode(_))));
    }

    #[test]
    fn already_exists_needs_code_and_message() {
        let exists = RpcError::Rpc {
            code: RPC_WALLET_ERROR,
            message: "Wallet file verification failed. Failed to create database path '/data/market.dat'. Database already exists.".into(),
        };
        assert!(exists.is_already_exists());

        let other_code = RpcError::Rpc {
            code: -18,
            message: "already exists".into(),
        };
        assert!(!other_code.is_already_exists());
        assert!(!RpcError::Transport("already exists".into()).is_already_exists());
    }

    #[test]
    fn already_loaded_by_message_on_older_nodes() {
        let err = RpcError::Rpc {
            code: RPC_WALLET_ERROR,
            message: "Wallet file verification failed. Refusing to load database. Data file 'market.dat' is already loaded.".into(),
        };
        assert!(err.is_already_loaded());
    }

    #[test]
    fn key_rejection_is_only_invalid_key_or_failed_import() {
        let invalid = RpcError::Rpc {
            code: RPC_INVALID_ADDRESS_OR_KEY,
            message: "Invalid private key encoding".into(),
        };
        let failed = RpcError::Rpc {
            code: -1,
            message: "Import failed.".into(),
        };
        assert!(invalid.is_key_rejected());
        assert!(failed.is_key_rejected());

        for (code, message) in [
            (-32601, "Method not found"),
            (-18, "Requested wallet does not exist or is not loaded"),
            (-28, "Loading block index..."),
        ] {
            let err = RpcError::Rpc {
                code,
                message: message.into(),
            };
            assert!(!err.is_key_rejected(), "{message}");
        }
        assert!(!RpcError::Transport("Import failed.".into()).is_key_rejected());
    }

    #[test]
    fn node_scope_uses_base_url() {
        assert_eq!(endpoint(&base(), Scope::Node).unwrap(), base());
    }

    #[test]
    fn wallet_scope_appends_wallet_path() {
        let url = endpoint(&base(), Scope::Wallet("market.dat")).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:51735/wallet/market.dat");
    }

    #[test]
    fn each_wallet_scope_names_its_own_wallet() {
        let market = endpoint(&base(), Scope::Wallet("market.dat")).unwrap();
        let storefront = endpoint(&base(), Scope::Wallet("storefront.dat")).unwrap();
        assert_eq!(market.path(), "/wallet/market.dat");
        assert_eq!(storefront.path(), "/wallet/storefront.dat");
    }

    #[test]
    fn wallet_scope_requires_a_name() {
        assert!(matches!(
            endpoint(&base(), Scope::Wallet("")),
            Err(RpcError::Transport(_))
        ));
    }

    #[test]
    fn request_serializes_as_json_rpc() {
        let params = [json!("market.dat")];
        let request = Request {
            jsonrpc: "1.0",
            id: 7,
            method: "loadwallet",
            params: &params,
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"jsonrpc": "1.0", "id": 7, "method": "loadwallet", "params": ["market.dat"]})
        );
    }

    #[test]
    fn invalid_url_is_a_config_error() {
        let config = NodeConfig {
            url: "not a url".into(),
            ..NodeConfig::default()
        };
        assert!(matches!(
            RpcClient::new(&config),
            Err(Error::Config(ConfigError::InvalidValue { field: "node.url", .. }))
        ));
    }
}
