//! reqwest implementation of [`ComplaintStore`]

use async_trait::async_trait;
use complaintdesk_types::{Complaint, NewComplaint, ResponseUpdate, StatusUpdate};
use reqwest::{Client, StatusCode, Url, header};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::{Result, StoreError};
use crate::store::ComplaintStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Single collection endpoint (GET/POST/PUT all target this URL)
    pub endpoint: String,
}

impl StoreConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

/// Error body returned by the store on 4xx/5xx
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// HTTP client for the collaborator store.
///
/// No timeout and no retry: a failed request is reported once.
pub struct HttpComplaintStore {
    endpoint: Url,
    client: Client,
}

impl HttpComplaintStore {
    pub fn new(config: StoreConfig) -> Result<Self> {
        let endpoint = Url::parse(&config.endpoint)
            .map_err(|_| StoreError::InvalidEndpoint(config.endpoint.clone()))?;

        let client = Client::builder()
            .user_agent(concat!("complaintdesk/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { endpoint, client })
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    async fn put<B: serde::Serialize + ?Sized>(&self, body: &B) -> Result<Complaint> {
        let response = self
            .client
            .put(self.endpoint.clone())
            .header(header::CONTENT_TYPE, "application/json")
            .json(body)
            .send()
            .await?;

        self.handle_response(response).await
    }

    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|b| b.error)
                .unwrap_or(body);
            warn!(status = status.as_u16(), %message, "store rejected request");

            if status == StatusCode::NOT_FOUND {
                return Err(StoreError::NotFound(message));
            }
            return Err(StoreError::Server {
                status: status.as_u16(),
                message,
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl ComplaintStore for HttpComplaintStore {
    async fn list(&self) -> Result<Vec<Complaint>> {
        debug!(endpoint = %self.endpoint, "fetching complaints");

        let response = self.client.get(self.endpoint.clone()).send().await?;
        let complaints: Vec<Complaint> = self.handle_response(response).await?;

        debug!(count = complaints.len(), "fetched complaints");
        Ok(complaints)
    }

    async fn create(&self, complaint: &NewComplaint) -> Result<Complaint> {
        debug!(
            kind = %complaint.kind,
            has_photo = complaint.photo.is_some(),
            "creating complaint"
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(header::CONTENT_TYPE, "application/json")
            .json(complaint)
            .send()
            .await?;

        self.handle_response(response).await
    }

    async fn update_status(&self, update: &StatusUpdate) -> Result<Complaint> {
        debug!(id = %update.id, status = %update.status, "updating status");
        self.put(update).await
    }

    async fn submit_response(&self, update: &ResponseUpdate) -> Result<Complaint> {
        debug!(id = %update.id, "submitting response");
        self.put(update).await
    }
}
