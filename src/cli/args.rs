//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Morse code to English translator backed by a dot/dash code tree
#[derive(Parser, Debug)]
#[command(name = "rsmorse")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub debug: u8,

    /// Config file (default: $XDG_CONFIG_HOME/rsmorse/rsmorse.toml)
    #[arg(short = 'c', long = "config", global = true, value_hint = ValueHint::FilePath)]
    pub config_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Translate Morse code to English (reads stdin without MESSAGE or --file)
    Decode {
        /// Morse message, e.g. ".... .. / - .... . .-. ."
        #[arg(conflicts_with = "file", allow_hyphen_values = true)]
        message: Option<String>,

        /// Read the message from a file; lines are concatenated
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,

        /// Fail on codes without a letter instead of dropping them
        #[arg(short, long)]
        strict: bool,
    },

    /// Show the code tree
    Tree,

    /// Print the in-order tree listing
    Fingerprint,

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective configuration
    Show,
    /// Show config file location
    Path,
    /// Print a config template
    Template,
}
