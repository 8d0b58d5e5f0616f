//! Command dispatch

use std::io;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::services::{MissPolicy, TranslationService};
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, Settings};
use crate::infrastructure::di::ServiceContainer;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load(cli.config_file.as_deref())?;
    debug!("settings: {:?}", settings);
    let container = ServiceContainer::new(settings);

    match &cli.command {
        Some(Commands::Decode {
            message,
            file,
            strict,
        }) => {
            let policy = strict.then_some(MissPolicy::Fail);
            let service = container.translation_service(policy);
            cmd_decode(&service, message.as_deref(), file.as_deref())
        }
        Some(Commands::Tree) => {
            let service = container.translation_service(None);
            output::info(service.render_tree().trim_end());
            Ok(())
        }
        Some(Commands::Fingerprint) => {
            let service = container.translation_service(None);
            output::info(&service.fingerprint());
            Ok(())
        }
        Some(Commands::Config { command }) => cmd_config(&container.settings, command),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => Err(CliError::Usage(
            "no command given, see `rsmorse --help`".to_string(),
        )),
    }
}

#[instrument(skip(service))]
fn cmd_decode(
    service: &TranslationService,
    message: Option<&str>,
    file: Option<&Path>,
) -> CliResult<()> {
    let text = match (message, file) {
        (Some(_), Some(_)) => {
            return Err(CliError::InvalidArgs(
                "give either MESSAGE or --file, not both".to_string(),
            ))
        }
        (Some(message), None) => service.decode(message)?,
        (None, Some(path)) => service.decode_file(path)?,
        (None, None) => service.decode_reader(io::stdin().lock())?,
    };

    if text.trim().is_empty() {
        output::warning("no letters decoded");
    }
    output::info(&text);
    Ok(())
}

fn cmd_config(settings: &Settings, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            output::header("Effective configuration");
            output::info(settings.to_toml()?.trim_end());
        }
        ConfigCommands::Path => match global_config_path() {
            Some(path) => output::info(&path.display()),
            None => output::error("cannot determine config directory"),
        },
        ConfigCommands::Template => output::info(&Settings::template()),
    }
    Ok(())
}
