//! Record service HTTP client.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

use super::dto::{CreateResponse, ErrorResponse, RecordResponse};
use crate::domain::entities::{NewRecord, Record};
use crate::domain::errors::ApiError;
use crate::domain::ports::RecordsPort;

/// Default collection endpoint.
pub const DEFAULT_API_URL: &str = "https://pro-backend-4boe.onrender.com";

/// HTTP adapter for the record collection endpoint.
///
/// The base URL is injected at construction so tests can point the client at
/// a local mock server.
pub struct FeedApiClient {
    client: Client,
    base_url: String,
}

impl FeedApiClient {
    /// Creates a client for the given base URL.
    ///
    /// No request timeout is configured: a hung request stays pending until
    /// the connection drops.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = Client::builder()
            .build()
            .map_err(|e| ApiError::network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    fn map_transport_error(e: &reqwest::Error) -> ApiError {
        warn!(error = %e, "Failed to reach record service");
        if e.is_connect() {
            ApiError::network("failed to connect to the record service")
        } else {
            ApiError::network(e.to_string())
        }
    }

    async fn handle_error_response(status: StatusCode, response: reqwest::Response) -> ApiError {
        match response.json::<ErrorResponse>().await {
            Ok(error) => ApiError::api(status.as_u16(), error.error),
            Err(_) => ApiError::status(status.as_u16()),
        }
    }
}

#[async_trait]
impl RecordsPort for FeedApiClient {
    async fn list_records(&self) -> Result<Vec<Record>, ApiError> {
        debug!(url = %self.base_url, "Listing records");

        let response = self
            .client
            .get(&self.base_url)
            .send()
            .await
            .map_err(|e| Self::map_transport_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::handle_error_response(status, response).await);
        }

        let records: Vec<RecordResponse> = response.json().await.map_err(|e| {
            warn!(error = %e, "Failed to parse record list");
            ApiError::invalid_response(format!("failed to parse record list: {e}"))
        })?;

        Ok(records.into_iter().map(Record::from).collect())
    }

    async fn create_record(&self, record: &NewRecord) -> Result<String, ApiError> {
        debug!(url = %self.base_url, name = %record.name, "Creating record");

        let response = self
            .client
            .post(&self.base_url)
            .json(record)
            .send()
            .await
            .map_err(|e| Self::map_transport_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::handle_error_response(status, response).await);
        }

        let created: CreateResponse = response.json().await.map_err(|e| {
            warn!(error = %e, "Failed to parse create confirmation");
            ApiError::invalid_response(format!("failed to parse confirmation: {e}"))
        })?;

        Ok(created.message)
    }
}
