//! Wire types for the record service.

use serde::Deserialize;

use crate::domain::entities::Record;

/// Stored record as returned by the service.
#[derive(Debug, Deserialize)]
pub struct RecordResponse {
    /// Server-assigned identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Stored name.
    pub name: String,
    /// Stored age.
    pub age: i64,
}

impl From<RecordResponse> for Record {
    fn from(response: RecordResponse) -> Self {
        Self::new(response.id, response.name, response.age)
    }
}

/// Confirmation payload for a successful create.
#[derive(Debug, Deserialize)]
pub struct CreateResponse {
    /// Server confirmation message.
    pub message: String,
}

/// Error payload for a rejected request.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    /// Server error message.
    pub error: String,
}
