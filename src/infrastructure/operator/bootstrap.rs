//! Bootstrap operator implementation.

use async_trait::async_trait;
use tracing::info;

use crate::domain::ProfileId;
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Config;
use crate::port::inbound::bootstrap::BootstrapReport;
use crate::port::inbound::operator::bootstrap::BootstrapOperator;

use super::entry::Operator;

#[async_trait]
impl BootstrapOperator for Operator {
    async fn bootstrap(&self, config_toml: &str, profile: ProfileId) -> Result<BootstrapReport> {
        let config = Config::parse_toml(config_toml)?;
        let services = bootstrap::build(&config)?;

        info!(%profile, node = %config.node.url, "starting bootstrap");
        services.bootstrap.seed_default_market(profile).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BootstrapError;

    #[tokio::test]
    async fn empty_profile_fails_before_touching_the_node() {
        let dir = tempfile::tempdir().unwrap();
        let toml = format!(
            "database = {:?}\n[node]\nurl = \"http://127.0.0.1:1\"",
            dir.path().join("market.db").to_string_lossy()
        );

        let err = Operator.bootstrap(&toml, ProfileId::new(3)).await.unwrap_err();

        assert!(matches!(
            err.as_bootstrap(),
            Some(BootstrapError::ConfigurationMissing { profile, .. }) if *profile == ProfileId::new(3)
        ));
    }
}
