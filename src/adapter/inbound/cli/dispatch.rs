//! Global flag handling and command dispatch.

use std::path::Path;

use super::command::{
    Cli, ColorChoice, Commands, ConfigCommand, MarketsCommand, SettingsCommand,
};
use super::{bootstrap, config, markets, operator, output, settings};
use crate::error::Result;

/// Apply global flags and run the selected command.
///
/// # Errors
/// Returns the command's error; the caller reports it and sets the exit code.
pub async fn run(cli: Cli) -> Result<()> {
    output::configure(output::OutputConfig::new(cli.json, cli.quiet, cli.verbose));
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {}
    }

    match cli.command {
        Commands::Bootstrap(args) => bootstrap::execute(&cli.config, args.profile).await,
        Commands::Settings(SettingsCommand::Set(args)) => {
            settings::execute_set(&cli.config, args.profile.profile, &args.key, &args.value).await
        }
        Commands::Settings(SettingsCommand::List(args)) => {
            settings::execute_list(&cli.config, args.profile).await
        }
        Commands::Markets(MarketsCommand::List(args)) => {
            markets::execute_list(&cli.config, args.profile).await
        }
        Commands::Config(ConfigCommand::Init(args)) => config::execute_init(&args.path, args.force),
        Commands::Config(ConfigCommand::Show) => config::execute_show(&cli.config),
    }
}

/// Log level implied by `-q` / `-v`, if it overrides the configured one.
fn level_override(quiet: bool, verbose: u8) -> Option<&'static str> {
    match verbose {
        0 if quiet => Some("error"),
        0 => None,
        1 => Some("debug"),
        _ => Some("trace"),
    }
}

/// Read the config file and start logging for a command that uses it.
pub(crate) fn load_config_toml(path: &Path) -> Result<String> {
    let config_toml = operator::read_config_toml(path)?;
    let level = level_override(output::is_quiet(), output::verbosity());
    operator::operator().start_logging(&config_toml, level)?;
    Ok(config_toml)
}
