//! List-records use case implementation.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::entities::Record;
use crate::domain::errors::ApiError;
use crate::domain::ports::RecordsPort;

/// Fetches the full record list from the service.
#[derive(Clone)]
pub struct FetchRecordsUseCase {
    records_port: Arc<dyn RecordsPort>,
}

impl FetchRecordsUseCase {
    /// Creates a new fetch use case.
    #[must_use]
    pub fn new(records_port: Arc<dyn RecordsPort>) -> Self {
        Self { records_port }
    }

    /// Fetches all stored records.
    ///
    /// The returned list replaces any previously displayed list wholesale;
    /// there is no incremental merge and no retry on failure.
    ///
    /// # Errors
    /// Returns error if the service is unreachable or responds with a
    /// non-success status.
    pub async fn execute(&self) -> Result<Vec<Record>, ApiError> {
        debug!("Fetching stored records");

        let records = self.records_port.list_records().await.map_err(|e| {
            warn!(error = %e, "Record fetch failed");
            e
        })?;

        info!(count = records.len(), "Fetched records");
        Ok(records)
    }
}
