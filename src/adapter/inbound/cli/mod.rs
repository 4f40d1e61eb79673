//! CLI module graph.

pub mod bootstrap;
pub mod command;
pub mod config;
pub mod dispatch;
pub mod markets;
pub mod operator;
pub mod output;
pub mod paths;
pub mod settings;
