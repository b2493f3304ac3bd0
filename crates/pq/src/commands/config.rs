//! Persistent settings for `pq` and the `pq config` subcommands.
//!
//! Settings live in `config.toml`: `$PQ_CONFIG` if set, otherwise
//! `$XDG_CONFIG_HOME/pq/` or `~/.config/pq/`. The `--file` flag and
//! `PQ_DATA_FILE` take precedence over `data_file`.

use std::env;
use std::fs;
use std::path::PathBuf;

use directories::BaseDirs;
use serde::{Deserialize, Serialize};

use super::{CommandContext, CommandError, Result};

/// Schema version written to new config files.
const CONFIG_VERSION: u32 = 1;

/// Keys accepted by `pq config set`.
const VALID_KEYS: &str = "data_file, output.color, data.reload";

/// Settings read from `config.toml`. Every field is optional on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Schema version; files written before versioning count as current.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Product CSV file used when `--file` is not given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,

    /// Dataset settings.
    #[serde(default)]
    pub data: DataConfig,
}

fn default_version() -> u32 {
    CONFIG_VERSION
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            data_file: None,
            output: OutputConfig::default(),
            data: DataConfig::default(),
        }
    }
}

/// The `[output]` table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Colour the table header; `false` forces plain output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<bool>,
}

/// The `[data]` table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataConfig {
    /// Re-read the dataset before every interactive query.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reload: Option<bool>,
}

/// Directory holding `config.toml`.
fn get_config_dir() -> Result<PathBuf> {
    if let Ok(path) = env::var("PQ_CONFIG") {
        let path = PathBuf::from(path);
        if let Some(parent) = path.parent() {
            return Ok(parent.to_path_buf());
        }
    }

    if let Ok(xdg_config) = env::var("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(xdg_config).join("pq"));
    }

    BaseDirs::new()
        .map(|dirs| dirs.home_dir().join(".config").join("pq"))
        .ok_or_else(|| {
            CommandError::Config("Could not determine config directory".to_string())
        })
}

/// Path of `config.toml`, honouring `PQ_CONFIG`.
pub fn get_config_path() -> Result<PathBuf> {
    if let Ok(path) = env::var("PQ_CONFIG") {
        return Ok(PathBuf::from(path));
    }

    let config_dir = get_config_dir()?;
    Ok(config_dir.join("config.toml"))
}

/// Reads `config.toml`.
///
/// A missing file yields [`Config::default`].
pub fn load_config() -> Result<Config> {
    let path = get_config_path()?;

    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&path)
        .map_err(|e| CommandError::Config(format!("Failed to read config: {}", e)))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| CommandError::Config(format!("Failed to parse config: {}", e)))?;

    migrate_config(config)
}

/// Rejects files written by a newer `pq` and stamps older ones as current.
fn migrate_config(mut config: Config) -> Result<Config> {
    if config.version > CONFIG_VERSION {
        return Err(CommandError::Config(format!(
            "Config version {} is newer than supported version {}",
            config.version, CONFIG_VERSION
        )));
    }

    config.version = CONFIG_VERSION;
    Ok(config)
}

/// Writes `config.toml`, creating its directory if needed.
fn save_config(config: &Config) -> Result<()> {
    let path = get_config_path()?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| CommandError::Config(format!("Failed to create config directory: {}", e)))?;
    }

    let content = toml::to_string_pretty(config)
        .map_err(|e| CommandError::Config(format!("Failed to serialize config: {}", e)))?;

    fs::write(&path, content)
        .map_err(|e| CommandError::Config(format!("Failed to write config: {}", e)))?;

    Ok(())
}

/// Executes the config show command.
pub fn execute_show(ctx: &CommandContext) -> Result<()> {
    let config = load_config()?;
    let path = get_config_path()?;

    if ctx.json_output {
        let output = serde_json::json!({
            "path": path.display().to_string(),
            "exists": path.exists(),
            "config": config,
            "effective": {
                "data_file": ctx.data_file.display().to_string(),
                "reload": ctx.reload,
            },
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !ctx.quiet {
        use owo_colors::OwoColorize;

        let header = "Configuration";
        if ctx.use_colors {
            println!("{}\n", header.green().bold());
        } else {
            println!("{}\n", header);
        }

        println!("File: {}", path.display());
        println!("Exists: {}\n", path.exists());

        if path.exists() {
            println!("Settings:");
            if let Some(ref data_file) = config.data_file {
                println!("  data_file: {}", data_file.display());
            }

            println!("\n[output]");
            if let Some(color) = config.output.color {
                println!("  color: {}", color);
            }

            println!("\n[data]");
            if let Some(reload) = config.data.reload {
                println!("  reload: {}", reload);
            }
        } else {
            println!("(No config file exists. Run 'pq config set <key> <value>' to create one.)");
        }

        println!("\nEffective dataset: {}", ctx.data_file.display());
    }

    Ok(())
}

/// Options for the config set command.
pub struct ConfigSetOptions {
    /// Configuration key.
    pub key: String,
    /// Configuration value.
    pub value: String,
}

/// Applies a single `key = value` assignment to a config.
fn apply_setting(config: &mut Config, key: &str, value: &str) -> Result<()> {
    let (section, field) = match key.split_once('.') {
        Some((section, field)) => (Some(section), field),
        None => (None, key),
    };

    match (section, field) {
        (None, "data_file") => {
            if value.trim().is_empty() {
                return Err(CommandError::Config("data_file cannot be empty".to_string()));
            }
            config.data_file = Some(PathBuf::from(value));
        }
        (Some("output"), "color") => {
            config.output.color = Some(parse_bool(value)?);
        }
        (Some("data"), "reload") => {
            config.data.reload = Some(parse_bool(value)?);
        }
        _ => {
            return Err(CommandError::Config(format!(
                "Unknown config key '{}'. Valid keys: {}",
                key, VALID_KEYS
            )));
        }
    }

    Ok(())
}

/// Executes the config set command.
pub fn execute_set(ctx: &CommandContext, opts: &ConfigSetOptions) -> Result<()> {
    let mut config = load_config()?;
    let path = get_config_path()?;

    apply_setting(&mut config, &opts.key, &opts.value)?;
    save_config(&config)?;

    if ctx.json_output {
        let output = serde_json::json!({
            "status": "success",
            "key": opts.key,
            "value": opts.value,
            "path": path.display().to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !ctx.quiet {
        println!("Set {} = {}", opts.key, opts.value);
    }

    Ok(())
}

/// Executes the config path command.
pub fn execute_path(ctx: &CommandContext) -> Result<()> {
    let path = get_config_path()?;

    if ctx.json_output {
        let output = serde_json::json!({
            "path": path.display().to_string(),
            "exists": path.exists(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", path.display());
    }

    Ok(())
}

/// Parses a boolean config value.
fn parse_bool(value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "1" | "on" => Ok(true),
        "false" | "no" | "0" | "off" => Ok(false),
        _ => Err(CommandError::Config(format!(
            "Invalid boolean value '{}'. Use true/false, yes/no, 1/0, or on/off",
            value
        ))),
    }
}
