//! Record service port definition.

use async_trait::async_trait;

use crate::domain::entities::{NewRecord, Record};
use crate::domain::errors::ApiError;

/// Port for the remote record collection.
#[async_trait]
pub trait RecordsPort: Send + Sync {
    /// Fetches all stored records.
    async fn list_records(&self) -> Result<Vec<Record>, ApiError>;

    /// Creates a record, returning the server's confirmation message.
    async fn create_record(&self, record: &NewRecord) -> Result<String, ApiError>;
}
