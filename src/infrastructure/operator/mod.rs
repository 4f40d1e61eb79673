//! Operator implementations for inbound adapters.

pub mod bootstrap;
pub mod config;
pub mod entry;
pub mod market;
pub mod setting;
