//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!                 ┌──────────────────────────┐
//!   CLI ────────▶ │  inbound::MarketBootstrap│
//!                 └────────────┬─────────────┘
//!                              │
//!        ┌─────────────────────┼─────────────────────┐
//!        ▼                     ▼                     ▼
//!  ┌───────────┐        ┌─────────────┐      ┌────────────────┐
//!  │  Stores   │        │ WalletNode  │      │SecureMessaging │
//!  └───────────┘        └─────────────┘      └────────────────┘
//! ```

pub mod inbound;
pub mod outbound;
