//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe the three external systems a reconciliation pass
//! touches: local persistence, the wallet node, and secure messaging.

pub mod messaging;
pub mod node;
pub mod store;
