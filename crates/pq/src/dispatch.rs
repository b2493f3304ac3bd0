//! Command dispatch module for routing CLI commands to their handlers.

use crate::cli::{Cli, Commands, ConfigCommands, Shell};
use crate::commands::{self, CommandContext, CommandError, Result};

/// A CLI command resolved to its handler.
#[derive(Debug)]
pub enum Dispatch<'a> {
    Repl { reload: bool },
    Query(&'a [String]),
    Check,
    Config(&'a Option<ConfigCommands>),
    Completions(&'a Shell),
}

impl<'a> Dispatch<'a> {
    /// Resolves the CLI command. No command starts the interactive session.
    pub fn from_cli(cli: &'a Cli) -> Self {
        match &cli.command {
            None => Self::Repl { reload: false },
            Some(Commands::Repl { reload }) => Self::Repl { reload: *reload },
            Some(Commands::Query { filter }) => Self::Query(filter),
            Some(Commands::Check) => Self::Check,
            Some(Commands::Config { command }) => Self::Config(command),
            Some(Commands::Completions { shell }) => Self::Completions(shell),
        }
    }

    /// Executes the command.
    pub fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Self::Repl { reload } => commands::repl::execute(ctx, *reload),
            Self::Query(filter) => {
                let opts = commands::query::QueryOptions {
                    filter: filter.to_vec(),
                };
                commands::query::execute(ctx, &opts)
            }
            Self::Check => commands::check::execute(ctx),
            Self::Config(command) => dispatch_config(ctx, command),
            Self::Completions(shell) => {
                commands::completions::execute(shell).map_err(CommandError::Io)
            }
        }
    }
}

/// Dispatch config subcommands.
fn dispatch_config(ctx: &CommandContext, command: &Option<ConfigCommands>) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => commands::config::execute_show(ctx),
        Some(ConfigCommands::Set { key, value }) => {
            let opts = commands::config::ConfigSetOptions {
                key: key.clone(),
                value: value.clone(),
            };
            commands::config::execute_set(ctx, &opts)
        }
        Some(ConfigCommands::Path) => commands::config::execute_path(ctx),
    }
}
