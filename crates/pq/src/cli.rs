//! CLI argument parsing using clap derive macros.
//!
//! This module defines the command-line interface for the pq CLI.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// pq - Filter a product dataset by price and expiration date
#[derive(Parser, Debug)]
#[command(name = "pq")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbose output (show debug information)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output matches as JSON instead of a table
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colors in output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Product CSV file (default: from config, then ./products.csv)
    #[arg(short, long, global = true, env = "PQ_DATA_FILE")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start an interactive session (default when no command is given)
    #[command(alias = "r")]
    Repl {
        /// Re-read the dataset before every query
        #[arg(long)]
        reload: bool,
    },

    /// Run a single filter query and exit
    ///
    /// Quote wildcards so the shell does not expand them:
    /// pq query 2.0 3.0 JUN-01-2019 JUL-01-2019
    /// pq query '4.0 * * JUL-01-2019'
    #[command(alias = "q")]
    Query {
        /// PRICE_MIN PRICE_MAX EXPIRES_START EXPIRES_STOP
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true, allow_negative_numbers = true)]
        filter: Vec<String>,
    },

    /// Check that every row of the dataset has a valid price and date
    Check,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,

        /// Configuration value
        value: String,
    },

    /// Print config file path
    Path,
}

/// Supported shells for completions
#[derive(ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}
