//! market-seed - Market bootstrap reconciler.
//!
//! Brings a profile's default marketplace into a consistent state across
//! local persistence, the wallet node and the secure-messaging subsystem.
//! Every pass is idempotent: running it again converges on the same market
//! record, the same wallet and the same registered addresses.
//!
//! # Architecture
//!
//! ```text
//!   adapter::inbound::cli
//!            │
//!   port::inbound::bootstrap::MarketBootstrap
//!            │
//!   application::bootstrap::BootstrapOrchestrator
//!            │
//!   port::outbound::{store, node, messaging}
//!            │
//!   adapter::outbound::{sqlite, particl}
//! ```
//!
//! # Modules
//!
//! - [`domain`] - Settings, wallets, markets, keys and typed outcomes
//! - [`port`] - Inbound use case and outbound port traits
//! - [`application`] - The reconciliation pass and its steps
//! - [`adapter`] - CLI, SQLite store and Particl JSON-RPC adapters
//! - [`infrastructure`] - Configuration and composition root
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use market_seed::domain::ProfileId;
//! use market_seed::infrastructure::bootstrap;
//! use market_seed::infrastructure::config::settings::Config;
//! use market_seed::port::inbound::bootstrap::MarketBootstrap;
//!
//! # async fn run() -> market_seed::error::Result<()> {
//! let config = Config::load("config.toml")?;
//! let services = bootstrap::build(&config)?;
//! let report = services.bootstrap.seed_default_market(ProfileId::new(1)).await?;
//! println!("market {} ready", report.market.id);
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
