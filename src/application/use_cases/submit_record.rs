//! Create-record use case implementation.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::entities::RecordDraft;
use crate::domain::errors::ApiError;
use crate::domain::ports::RecordsPort;

/// Submits a draft to the service as a new record.
#[derive(Clone)]
pub struct SubmitRecordUseCase {
    records_port: Arc<dyn RecordsPort>,
}

impl SubmitRecordUseCase {
    /// Creates a new submit use case.
    #[must_use]
    pub fn new(records_port: Arc<dyn RecordsPort>) -> Self {
        Self { records_port }
    }

    /// Submits the draft, returning the server's confirmation message.
    ///
    /// The draft's age is forwarded as an integer when it parses and as the
    /// raw string otherwise; rejecting bad input is the server's job.
    ///
    /// # Errors
    /// Returns error if the service is unreachable or rejects the record.
    pub async fn execute(&self, draft: &RecordDraft) -> Result<String, ApiError> {
        let payload = draft.to_new_record();
        debug!(name = %payload.name, "Submitting record");

        let message = self
            .records_port
            .create_record(&payload)
            .await
            .map_err(|e| {
                warn!(error = %e, "Record submission failed");
                e
            })?;

        info!(name = %payload.name, "Record stored");
        Ok(message)
    }
}
