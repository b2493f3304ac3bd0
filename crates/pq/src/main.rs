use clap::Parser;
use log::LevelFilter;
use std::process::ExitCode;

mod cli;
mod commands;
mod dispatch;
mod output;

use cli::Cli;
use commands::config::load_config;
use commands::{CommandContext, CommandError};
use dispatch::Dispatch;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                let error_json = serde_json::json!({
                    "error": {
                        "code": error_code(&e),
                        "message": e.to_string(),
                    }
                });
                eprintln!("{error_json:#}");
            } else {
                eprintln!("Error: {e}");
            }
            error_exit_code(&e)
        }
    }
}

fn run(cli: &Cli) -> commands::Result<()> {
    let config = load_config()?;
    let ctx = CommandContext::new(cli, &config);
    log::debug!("using dataset {}", ctx.data_file.display());

    Dispatch::from_cli(cli).execute(&ctx)
}

/// Initializes the logger.
///
/// `--verbose` shows debug output, `--quiet` only errors; `RUST_LOG` overrides both.
fn init_logging(cli: &Cli) {
    env_logger::Builder::new()
        .filter_level(log_level(cli))
        .format_timestamp(None)
        .parse_default_env()
        .init();
}

fn log_level(cli: &Cli) -> LevelFilter {
    if cli.verbose {
        LevelFilter::Debug
    } else if cli.quiet {
        LevelFilter::Error
    } else {
        LevelFilter::Warn
    }
}

/// Returns the error code string for JSON output.
fn error_code(e: &CommandError) -> &'static str {
    match e {
        CommandError::Filter(_) => "FILTER_ERROR",
        CommandError::Dataset(_) => "DATASET_ERROR",
        CommandError::Row(_) => "DATA_ERROR",
        CommandError::Config(_) => "CONFIG_ERROR",
        CommandError::Io(_) => "IO_ERROR",
        CommandError::Json(_) => "JSON_ERROR",
    }
}

/// Returns the exit code for an error.
fn error_exit_code(e: &CommandError) -> ExitCode {
    ExitCode::from(exit_status(e))
}

fn exit_status(e: &CommandError) -> u8 {
    match e {
        CommandError::Filter(_) => 1,
        CommandError::Json(_) => 1,
        CommandError::Io(_) => 3,
        CommandError::Dataset(_) => 4,
        CommandError::Row(_) => 4,
        CommandError::Config(_) => 5,
    }
}
