//! Market listing for operator-facing adapters.

use async_trait::async_trait;

use crate::domain::{Market, ProfileId};
use crate::error::Result;

/// Read-only view over stored markets.
#[async_trait]
pub trait MarketOperator: Send + Sync {
    /// Markets of a profile in creation order.
    async fn list_markets(&self, config_toml: &str, profile: ProfileId) -> Result<Vec<Market>>;
}
