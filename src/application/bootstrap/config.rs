//! Bootstrap policy configuration.

use serde::{Deserialize, Serialize};

use crate::domain::DEFAULT_MARKET_WALLET;

/// What to do when secure messaging rejects a private key import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyRejectionPolicy {
    /// Log the rejection and finish the pass without that address registered.
    #[default]
    Continue,
    /// Fail the pass with `KeyImportRejected`.
    Abort,
}

impl KeyRejectionPolicy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Continue => "continue",
            Self::Abort => "abort",
        }
    }
}

/// Settings for reconciliation passes.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BootstrapConfig {
    /// Node wallet backing the default market.
    #[serde(default = "default_wallet_name")]
    pub wallet_name: String,

    /// Reaction to a rejected key import.
    #[serde(default)]
    pub on_key_rejected: KeyRejectionPolicy,
}

fn default_wallet_name() -> String {
    DEFAULT_MARKET_WALLET.to_string()
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            wallet_name: default_wallet_name(),
            on_key_rejected: KeyRejectionPolicy::default(),
        }
    }
}
