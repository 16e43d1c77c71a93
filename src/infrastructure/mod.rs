//! Infrastructure layer with external service adapters.

/// Record service HTTP client.
pub mod api;
/// Application configuration.
pub mod config;

pub use api::FeedApiClient;
pub use config::{AppConfig, CliArgs, LogLevel};
