//! Application services (use cases).
//!
//! These services sequence domain logic over the outbound ports.

pub mod bootstrap;
