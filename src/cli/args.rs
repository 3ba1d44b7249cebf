// src/cli/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Terminal client for the tmarks bookmark service
pub struct Cli {
    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Turn debugging information on
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Print a default configuration file to stdout
    #[arg(long = "generate-config")]
    pub generate_config: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage the bookmark trash
    Trash {
        #[command(subcommand)]
        command: TrashCommands,
    },

    /// Interactively cycle the list filters a bookmark view consumes
    Browse,

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for: bash, zsh, fish
        shell: String,
    },
}

#[derive(Subcommand)]
pub enum TrashCommands {
    /// List the bookmarks currently in the trash
    List {
        #[arg(long = "json", help = "non-interactive mode, output as json")]
        is_json: bool,
    },

    /// Restore a trashed bookmark
    Restore {
        /// ID of the bookmark to restore
        id: String,

        #[arg(short = 'y', long = "yes", help = "skip the confirmation prompt")]
        assume_yes: bool,
    },

    /// Permanently delete a trashed bookmark
    Rm {
        /// ID of the bookmark to delete
        id: String,

        #[arg(short = 'y', long = "yes", help = "skip the confirmation prompt")]
        assume_yes: bool,
    },

    /// Permanently delete everything in the trash
    Empty {
        #[arg(short = 'y', long = "yes", help = "skip the confirmation prompt")]
        assume_yes: bool,
    },
}
