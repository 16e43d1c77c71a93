//! Application configuration.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

use super::args::CliArgs;
use crate::infrastructure::api::client::DEFAULT_API_URL;

const APP_NAME: &str = "intfeed";
const APP_QUALIFIER: &str = "io";
const APP_ORGANIZATION: &str = "intfeed";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Configuration loading errors.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml deserialization error: {0}")]
    TomlDe(#[from] toml::de::Error),
}

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration, merged from the config file and CLI arguments.
#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Record service base URL.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl AppConfig {
    /// Loads configuration and applies CLI argument overrides.
    ///
    /// A missing config file yields the defaults; an unparseable one yields
    /// the defaults with a warning, never a startup failure.
    ///
    /// # Errors
    /// Returns error if an existing config file cannot be read.
    pub fn load(args: CliArgs) -> Result<Self, ConfigError> {
        let config_path = args
            .config
            .clone()
            .or_else(Self::default_config_path)
            .filter(|path| path.exists());

        let mut config = match config_path {
            Some(path) => {
                let content = fs::read_to_string(&path)?;
                match toml::from_str::<Self>(&content) {
                    Ok(config) => config,
                    Err(e) => {
                        warn!(error = %e, "Failed to parse config file, using defaults");
                        Self::default()
                    }
                }
            }
            None => Self::default(),
        };

        config.merge_with_args(args);
        Ok(config)
    }

    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(api_url) = args.api_url {
            self.api_url = api_url;
        }
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
    }

    /// Returns default config file path.
    #[must_use]
    pub fn default_config_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("intfeed.log"))
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            log_path: None,
            log_level: LogLevel::Info,
        }
    }
}
