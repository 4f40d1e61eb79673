//! The concrete operator installed by the binary.

/// Stateless operator: every call parses the config it is handed and wires
/// what it needs from that.
#[derive(Debug, Default, Clone, Copy)]
pub struct Operator;
