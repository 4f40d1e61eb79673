use thiserror::Error;

use crate::domain::id::ProfileId;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Failures of a reconciliation pass.
///
/// The idempotency responses of the external node (`already exists`,
/// `already loaded`) are not errors; they surface as typed outcomes in
/// [`crate::domain::outcome`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BootstrapError {
    #[error("default market settings not found for profile {profile}: missing {}", .missing.join(", "))]
    ConfigurationMissing {
        profile: ProfileId,
        missing: Vec<&'static str>,
    },

    #[error("private key for {address} was rejected by secure messaging")]
    KeyImportRejected { address: String },

    #[error("imported key for {address} has no matching local key")]
    InternalInconsistency { address: String },

    #[error("external node error: {0}")]
    ExternalNode(String),

    #[error("secure messaging error: {0}")]
    Messaging(String),

    #[error("market {0} disappeared before it could be finalized")]
    MarketVanished(i32),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Bootstrap(#[from] BootstrapError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    #[error("connection error: {0}")]
    Connection(String),

    #[error("database error: {0}")]
    Database(String),

    #[error("parse error: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Return the bootstrap failure carried by this error, if any.
    #[must_use]
    pub fn as_bootstrap(&self) -> Option<&BootstrapError> {
        match self {
            Error::Bootstrap(err) => Some(err),
            _ => None,
        }
    }
}
