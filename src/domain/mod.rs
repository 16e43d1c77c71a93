//! Domain layer with core entities and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;

pub use entities::{AgeInput, NewRecord, Record, RecordDraft, RecordId};
pub use errors::ApiError;
pub use ports::RecordsPort;
