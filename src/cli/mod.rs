// src/cli/mod.rs
use std::io;

use crate::cli::args::{Cli, Commands, TrashCommands};
use crate::cli::error::{CliError, CliResult};
use crate::config::Settings;
use crate::infrastructure::di::ServiceContainer;

pub mod args;
pub mod browse;
pub mod display;
pub mod error;
pub mod trash_commands;

pub async fn execute_command(cli: Cli, settings: &Settings) -> CliResult<()> {
    if cli.generate_config {
        println!("{}", crate::config::generate_default_config());
        return Ok(());
    }
    match cli.command {
        Some(Commands::Trash { command }) => {
            // Composition root; only trash commands talk to the server.
            let container = ServiceContainer::new(settings)?;
            match command {
                TrashCommands::List { is_json } => trash_commands::list(&container, is_json).await,
                TrashCommands::Restore { id, assume_yes } => {
                    trash_commands::restore(&container, &id, assume_yes).await
                }
                TrashCommands::Rm { id, assume_yes } => {
                    trash_commands::permanent_delete(&container, &id, assume_yes).await
                }
                TrashCommands::Empty { assume_yes } => {
                    trash_commands::empty(&container, assume_yes).await
                }
            }
        }
        Some(Commands::Browse) => browse::browse(settings),
        Some(Commands::Completion { shell }) => handle_completion(&shell),
        None => Ok(()),
    }
}

fn handle_completion(shell: &str) -> CliResult<()> {
    use clap::CommandFactory;
    use clap_complete::{generate, Shell};

    let shell: Shell = shell
        .parse()
        .map_err(|_| CliError::InvalidInput(format!("Unsupported shell: {}", shell)))?;

    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
