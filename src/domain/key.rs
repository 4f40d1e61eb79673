//! Key material handled during market bootstrap.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::id::Address;

/// Private key in the node's import format (WIF).
///
/// `Debug` and `Display` never print the key itself.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PrivateKey(String);

impl PrivateKey {
    /// Wrap an encoded private key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Expose the encoded key for submission to the messaging subsystem.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Short, non-reversible form for logs and CLI output.
    #[must_use]
    pub fn redacted(&self) -> String {
        let visible: String = self.0.chars().take(4).collect();
        format!("{visible}…")
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PrivateKey({})", self.redacted())
    }
}

impl fmt::Display for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.redacted())
    }
}

impl From<&str> for PrivateKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for PrivateKey {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// Public key as reported by the secure-messaging subsystem.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PublicKey(String);

impl PublicKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PublicKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// An `(address, public key)` pair known to the secure-messaging subsystem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBinding {
    pub address: Address,
    pub public_key: PublicKey,
}

impl KeyBinding {
    pub fn new(address: impl Into<Address>, public_key: impl Into<PublicKey>) -> Self {
        Self {
            address: address.into(),
            public_key: public_key.into(),
        }
    }
}
