//! SQLite persistence adapters.
//!
//! Provides the SQLite-backed implementation of the setting, wallet and
//! market stores using Diesel ORM.

pub mod database;
pub mod store;

pub use database::connection::{create_pool, run_migrations, DbPool};
pub use store::SqliteStore;
