//! Record service HTTP client.

/// HTTP client implementation.
pub mod client;
/// Wire DTOs.
pub mod dto;

pub use client::FeedApiClient;
