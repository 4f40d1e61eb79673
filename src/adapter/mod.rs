//! Hexagonal adapters.
//!
//! - [`inbound`] - Driving side: the CLI.
//! - [`outbound`] - Driven side: SQLite persistence and the Particl node.

pub mod inbound;
pub mod outbound;
