//! Command implementations for the pq CLI.
//!
//! This module contains the actual command handlers that are invoked by the CLI.

pub mod check;
pub mod completions;
pub mod config;
pub mod query;
pub mod repl;

use std::borrow::Cow;
use std::env;
use std::io::{self, IsTerminal};
use std::path::PathBuf;

use prodquery_rs::dataset::{Dataset, DatasetError, RowError, DEFAULT_DATA_FILE};
use prodquery_rs::filter::FilterError;

use crate::cli::Cli;
use config::Config;

/// Error type for command execution.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// Filter parsing error.
    #[error("filter error: {0}")]
    Filter(#[from] FilterError),

    /// Dataset loading error.
    #[error("dataset error: {0}")]
    Dataset(#[from] DatasetError),

    /// Malformed price or date in a dataset row.
    #[error("data error: {0}")]
    Row(#[from] RowError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for command execution.
pub type Result<T> = std::result::Result<T, CommandError>;

/// Context for command execution, containing common dependencies.
#[derive(Debug, Clone)]
pub struct CommandContext {
    /// Whether to output JSON.
    pub json_output: bool,
    /// Whether to use colors.
    pub use_colors: bool,
    /// Whether to be quiet (errors only).
    pub quiet: bool,
    /// Whether to be verbose.
    pub verbose: bool,
    /// Dataset file to query.
    pub data_file: PathBuf,
    /// Whether to re-read the dataset before every query.
    pub reload: bool,
}

impl CommandContext {
    /// Creates a new command context from CLI arguments and the loaded config.
    ///
    /// The data file resolves as: `--file` / `PQ_DATA_FILE` > config > `products.csv`.
    /// Colors are disabled by `--no-color`, `output.color = false`, the
    /// `NO_COLOR` environment variable, or a non-terminal stdout.
    pub fn new(cli: &Cli, config: &Config) -> Self {
        let data_file = cli
            .file
            .clone()
            .or_else(|| config.data_file.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));

        let use_colors = !cli.no_color
            && config.output.color != Some(false)
            && env::var_os("NO_COLOR").is_none()
            && io::stdout().is_terminal();

        Self {
            json_output: cli.json,
            use_colors,
            quiet: cli.quiet,
            verbose: cli.verbose,
            data_file,
            reload: config.data.reload.unwrap_or(false),
        }
    }

    /// Loads the dataset named by this context.
    pub fn load_dataset(&self) -> Result<Dataset> {
        log::debug!("reading dataset {}", self.data_file.display());
        Ok(Dataset::from_path(&self.data_file)?)
    }
}

/// Where each query reads its rows from.
///
/// A cached dataset is read once up front; a reloading source opens and
/// reads the file again for every query.
#[derive(Debug)]
pub enum DatasetSource {
    /// Rows loaded once and reused.
    Cached(Dataset),
    /// Path re-read on every call to [`DatasetSource::dataset`].
    Reload(PathBuf),
}

impl DatasetSource {
    /// Builds the source for a context, loading the dataset now unless reloading.
    ///
    /// Loading eagerly means a missing or malformed file is reported before
    /// the first query is read.
    pub fn for_context(ctx: &CommandContext, reload: bool) -> Result<Self> {
        if reload {
            Ok(Self::Reload(ctx.data_file.clone()))
        } else {
            ctx.load_dataset().map(Self::Cached)
        }
    }

    /// Returns the rows to query.
    pub fn dataset(&self) -> Result<Cow<'_, Dataset>> {
        match self {
            Self::Cached(dataset) => Ok(Cow::Borrowed(dataset)),
            Self::Reload(path) => {
                log::debug!("reloading dataset {}", path.display());
                Ok(Cow::Owned(Dataset::from_path(path)?))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use clap::Parser;
    use serial_test::serial;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_context_file_flag_overrides_config() {
        let cli = Cli::parse_from(["pq", "--file", "flag.csv", "check"]);
        let config = Config {
            data_file: Some(PathBuf::from("config.csv")),
            ..Config::default()
        };
        let ctx = CommandContext::new(&cli, &config);
        assert_eq!(ctx.data_file, PathBuf::from("flag.csv"));
    }

    /// Runs `f` with `PQ_DATA_FILE` unset, restoring it afterwards.
    fn without_data_file_env<T>(f: impl FnOnce() -> T) -> T {
        let original = env::var_os("PQ_DATA_FILE");
        env::remove_var("PQ_DATA_FILE");

        let result = f();

        if let Some(val) = original {
            env::set_var("PQ_DATA_FILE", val);
        }
        result
    }

    #[test]
    #[serial]
    fn test_context_uses_config_data_file() {
        let cli = without_data_file_env(|| Cli::try_parse_from(["pq", "check"]).unwrap());
        assert_eq!(cli.file, None);

        let config = Config {
            data_file: Some(PathBuf::from("config.csv")),
            ..Config::default()
        };
        let ctx = CommandContext::new(&cli, &config);
        assert_eq!(ctx.data_file, PathBuf::from("config.csv"));
    }

    #[test]
    #[serial]
    fn test_context_defaults_to_products_csv() {
        let cli = without_data_file_env(|| Cli::try_parse_from(["pq", "check"]).unwrap());
        let ctx = CommandContext::new(&cli, &Config::default());
        assert_eq!(ctx.data_file, PathBuf::from(DEFAULT_DATA_FILE));
    }

    #[test]
    fn test_context_no_color_flag() {
        let cli = Cli::parse_from(["pq", "--no-color", "check"]);
        let ctx = CommandContext::new(&cli, &Config::default());
        assert!(!ctx.use_colors);
    }

    #[test]
    fn test_context_reload_from_config() {
        let cli = Cli::parse_from(["pq", "check"]);
        let mut config = Config::default();
        assert!(!CommandContext::new(&cli, &config).reload);

        config.data.reload = Some(true);
        assert!(CommandContext::new(&cli, &config).reload);
    }

    #[test]
    fn test_reload_source_rereads_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("products.csv");
        fs::write(&path, "id,name,price,expires\n1,A,1.00,01/01/2019\n").unwrap();

        let source = DatasetSource::Reload(path.clone());
        assert_eq!(source.dataset().unwrap().len(), 1);

        fs::write(
            &path,
            "id,name,price,expires\n1,A,1.00,01/01/2019\n2,B,2.00,01/01/2019\n",
        )
        .unwrap();
        assert_eq!(source.dataset().unwrap().len(), 2);
    }

    #[test]
    fn test_cached_source_ignores_file_changes() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("products.csv");
        fs::write(&path, "id,name,price,expires\n1,A,1.00,01/01/2019\n").unwrap();

        let cli = Cli::parse_from(["pq", "--file", path.to_str().unwrap(), "repl"]);
        let ctx = CommandContext::new(&cli, &Config::default());
        let source = DatasetSource::for_context(&ctx, false).unwrap();

        fs::remove_file(&path).unwrap();
        assert_eq!(source.dataset().unwrap().len(), 1);
    }

    #[test]
    fn test_cached_source_reports_missing_file_up_front() {
        let cli = Cli::parse_from(["pq", "--file", "/nonexistent/products.csv", "repl"]);
        let ctx = CommandContext::new(&cli, &Config::default());
        assert!(matches!(
            DatasetSource::for_context(&ctx, false),
            Err(CommandError::Dataset(DatasetError::Open { .. }))
        ));
        assert!(DatasetSource::for_context(&ctx, true).is_ok());
    }
}
