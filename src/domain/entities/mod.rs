//! Domain entities.

/// In-progress form input and submission payload.
pub mod draft;
/// Stored record entity.
pub mod record;

pub use draft::{AgeInput, NewRecord, RecordDraft};
pub use record::{Record, RecordId};
