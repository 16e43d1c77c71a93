//! Port definitions for external services.

/// Record service port.
pub mod records_port;

pub use records_port::RecordsPort;

#[cfg(test)]
pub use records_port::mock;
