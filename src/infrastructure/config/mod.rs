//! Application configuration.

/// Configuration model and file loading.
pub mod app_config;
/// Command line arguments.
pub mod args;

pub use app_config::{AppConfig, ConfigError, LogLevel};
pub use args::CliArgs;
