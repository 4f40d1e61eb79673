//! Infrastructure configuration modules.

pub mod logging;
pub mod node;
pub mod settings;
