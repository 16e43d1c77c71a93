//! Domain error types.

/// Record service API errors.
pub mod api_error;

pub use api_error::ApiError;
