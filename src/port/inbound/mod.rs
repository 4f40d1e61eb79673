//! Inbound ports (driving side): use cases exposed to inbound adapters.
//!
//! # Modules
//!
//! - [`bootstrap`]: The market reconciliation use case
//! - [`operator`]: Operator-facing use cases for the CLI

pub mod bootstrap;
pub mod operator;
