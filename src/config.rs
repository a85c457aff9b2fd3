//! Configuration for ticket-desk
//!
//! Values come from built-in defaults, then an optional TOML file, then
//! `TICKET_DESK__*` environment variables (`__` separates nested keys, e.g.
//! `TICKET_DESK__OUTPUT__COLOR=false`). `default_priority` takes a name or a
//! level, so `"vip"` and `1` are equivalent.

use crate::core::Priority;
use crate::error::{Result, TicketDeskError};
use config::{Environment, File, FileFormat};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const ENV_PREFIX: &str = "TICKET_DESK";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Load the demo tickets at startup
    pub seed_sample_data: bool,
    /// Priority used when the entered priority cannot be parsed
    pub default_priority: Priority,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub color: bool,
    /// `chrono` format string for timestamps, rendered in local time
    pub time_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed_sample_data: true,
            default_priority: Priority::Normal,
            output: OutputConfig::default(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: true,
            time_format: "%Y-%m-%d %H:%M:%S".to_string(),
        }
    }
}

impl Config {
    /// Default config file location, `<config dir>/ticket-desk/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "ticket-desk").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load configuration, reading `path` if given
    ///
    /// An explicit path must exist; the default location is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) => {
                if !path.exists() {
                    return Err(TicketDeskError::ConfigError(format!(
                        "config file not found: {}",
                        path.display()
                    )));
                }
                Some(File::from(path).format(FileFormat::Toml).required(true))
            },
            None => Self::default_path()
                .map(|path| File::from(path).format(FileFormat::Toml).required(false)),
        };

        let mut builder = config::Config::builder();
        if let Some(file) = file {
            builder = builder.add_source(file);
        }

        let config = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Self>()?;

        tracing::debug!(?config, "configuration loaded");
        Ok(config)
    }

    /// Parse configuration from a TOML string, ignoring the environment
    pub fn from_toml_str(content: &str) -> Result<Self> {
        config::Config::builder()
            .add_source(File::from_str(content, FileFormat::Toml))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }
}
