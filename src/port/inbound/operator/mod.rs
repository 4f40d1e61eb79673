//! Operator-facing inbound ports consumed by CLI adapters.

pub mod bootstrap;
pub mod configuration;
pub mod market;
pub mod port;
pub mod setting;
