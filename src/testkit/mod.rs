//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`node`] - [`RecordingNode`](node::RecordingNode), a scripted wallet node.
//! - [`messaging`] - [`RecordingMessaging`](messaging::RecordingMessaging),
//!   a scripted secure-messaging subsystem.
//! - [`store`] - [`MemoryStore`](store::MemoryStore), all store ports in memory.
//! - [`domain`] - Builders for settings and drafts.

pub mod domain;
pub mod messaging;
pub mod node;
pub mod store;
