//! Unified operator capability surface for inbound adapters.

use super::bootstrap::BootstrapOperator;
use super::configuration::ConfigurationOperator;
use super::market::MarketOperator;
use super::setting::SettingOperator;

/// Unified operator capability surface consumed by inbound adapters.
pub trait OperatorPort:
    BootstrapOperator + ConfigurationOperator + MarketOperator + SettingOperator
{
}

impl<T> OperatorPort for T where
    T: BootstrapOperator + ConfigurationOperator + MarketOperator + SettingOperator
{
}
