//! Record service API error types.

use thiserror::Error;

/// Errors from the record service.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum ApiError {
    #[error("network error: {message}")]
    Network { message: String },

    #[error("service returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("service returned HTTP {status}")]
    Status { status: u16 },

    #[error("malformed response: {message}")]
    InvalidResponse { message: String },
}

impl ApiError {
    /// Creates a network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Creates an application error carrying the server's error payload.
    #[must_use]
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Creates an error for a non-success response without an error payload.
    #[must_use]
    pub const fn status(status: u16) -> Self {
        Self::Status { status }
    }

    /// Creates a malformed-response error.
    #[must_use]
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse {
            message: message.into(),
        }
    }

    /// Returns whether the error is transport related.
    #[must_use]
    pub const fn is_network_error(&self) -> bool {
        matches!(self, Self::Network { .. })
    }

    /// Returns the server-provided error message, if the error carries one.
    ///
    /// Only `Api` errors have one: a rejection without a parseable error
    /// payload yields `None` so the caller falls back to a generic message.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Api { message, .. } => Some(message),
            _ => None,
        }
    }
}
