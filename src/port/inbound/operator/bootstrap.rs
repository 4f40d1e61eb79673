//! Bootstrap use case for operator-facing adapters.

use async_trait::async_trait;

use crate::domain::ProfileId;
use crate::error::Result;
use crate::port::inbound::bootstrap::BootstrapReport;

/// Runs a reconciliation pass against the configured database and node.
#[async_trait]
pub trait BootstrapOperator: Send + Sync {
    /// Seed the default market of `profile` from its stored settings.
    async fn bootstrap(&self, config_toml: &str, profile: ProfileId) -> Result<BootstrapReport>;
}
