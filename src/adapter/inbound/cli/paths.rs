//! Path utilities for market-seed.
//!
//! All data lives under `~/.market-seed/`:
//! - `~/.market-seed/config.toml` - main configuration
//! - `~/.market-seed/market-seed.db` - settings, wallets and markets

use std::path::PathBuf;

/// Returns the market-seed home directory (`~/.market-seed/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".market-seed")
}

/// Returns the default config file path (`~/.market-seed/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}

/// Returns the default database path (`~/.market-seed/market-seed.db`).
pub fn default_database() -> PathBuf {
    home_dir().join("market-seed.db")
}
