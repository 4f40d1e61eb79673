//! Outbound adapters (driven side).

pub mod particl;
pub mod sqlite;
