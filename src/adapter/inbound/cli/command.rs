//! Command-line interface definitions.
//!
//! Defines the CLI structure for market-seed using `clap`: seeding the
//! default market of a profile, managing profile settings, listing markets
//! and inspecting configuration.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use super::paths;

/// Market bootstrap reconciler
#[derive(Parser, Debug)]
#[command(name = "market-seed")]
#[command(version)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to the configuration file.
    #[arg(short, long, global = true, default_value_os_t = paths::default_config())]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands for the market-seed CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Seed the default market of a profile (one reconciliation pass)
    Bootstrap(ProfileArg),

    /// Manage profile settings
    #[command(subcommand)]
    Settings(SettingsCommand),

    /// Inspect market records
    #[command(subcommand)]
    Markets(MarketsCommand),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `market-seed settings`.
#[derive(Subcommand, Debug)]
pub enum SettingsCommand {
    /// Create or overwrite a setting.
    Set(SettingsSetArgs),
    /// List every setting of a profile.
    List(ProfileArg),
}

/// Subcommands for `market-seed markets`.
#[derive(Subcommand, Debug)]
pub enum MarketsCommand {
    /// List the markets of a profile.
    List(ProfileArg),
}

/// Subcommands for `market-seed config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Generate a new configuration file from template.
    Init(ConfigInitArgs),
    /// Display the effective configuration with defaults applied.
    Show,
}

/// Profile selector shared by most commands.
#[derive(Args, Debug)]
pub struct ProfileArg {
    /// Profile id.
    #[arg(short, long)]
    pub profile: i32,
}

/// Arguments for `settings set`.
#[derive(Args, Debug)]
pub struct SettingsSetArgs {
    #[command(flatten)]
    pub profile: ProfileArg,
    /// Setting key (e.g. DEFAULT_MARKETPLACE_NAME).
    pub key: String,
    /// Setting value.
    pub value: String,
}

/// Arguments for `config init`.
#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Output path for the generated configuration file.
    #[arg(default_value_os_t = paths::default_config())]
    pub path: PathBuf,
    /// Overwrite the file if it already exists.
    #[arg(long)]
    pub force: bool,
}
