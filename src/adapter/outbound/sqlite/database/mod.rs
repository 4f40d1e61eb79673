//! SQLite database modules.
//!
//! Provides database connection management, schema definitions, and
//! Diesel model types for settings, wallets and markets.

pub mod connection;
pub mod model;
pub mod schema;
