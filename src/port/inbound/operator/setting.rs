//! Settings use cases for operator-facing adapters.

use async_trait::async_trait;

use crate::domain::{ProfileId, Setting};
use crate::error::Result;

/// Reads and writes per-profile settings.
#[async_trait]
pub trait SettingOperator: Send + Sync {
    /// Insert or overwrite one setting.
    async fn set_setting(
        &self,
        config_toml: &str,
        profile: ProfileId,
        key: &str,
        value: &str,
    ) -> Result<Setting>;

    /// All settings of a profile, ordered by key.
    async fn list_settings(&self, config_toml: &str, profile: ProfileId) -> Result<Vec<Setting>>;
}
