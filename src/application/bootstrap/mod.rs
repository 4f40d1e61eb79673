//! Market bootstrap: one reconciliation pass per profile.
//!
//! Leaves first: [`settings::SettingsResolver`], [`record::MarketRecordStore`],
//! [`wallet::WalletProvisioner`], [`key::KeyImporter`],
//! [`messaging::MessagingRegistrar`], sequenced by
//! [`orchestrator::BootstrapOrchestrator`] behind a [`gate::ProfileGate`].

pub mod config;
pub mod gate;
pub mod key;
pub mod messaging;
pub mod orchestrator;
pub mod record;
pub mod settings;
pub mod wallet;

pub use config::{BootstrapConfig, KeyRejectionPolicy};
pub use orchestrator::{BootstrapOrchestrator, BootstrapPorts, BootstrapStage};
