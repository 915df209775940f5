//! `MemoryBackend` served over HTTP.
//!
//! The responder keeps state between requests, which a canned
//! `ResponseTemplate` cannot, so a created complaint shows up in the
//! following GET just like against the real store.

use complaintdesk_types::Complaint;
use std::sync::{Arc, Mutex};
use wiremock::matchers::path;
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

use crate::memory::MemoryBackend;

/// Path of the collection endpoint on the fake server
pub const COLLECTION_PATH: &str = "/api/complaints";

struct StoreResponder {
    backend: Arc<Mutex<MemoryBackend>>,
}

impl Respond for StoreResponder {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let Ok(mut backend) = self.backend.lock() else {
            return ResponseTemplate::new(500);
        };
        let (status, body) = backend.handle(request.method.as_str(), &request.body);
        ResponseTemplate::new(status).set_body_json(body)
    }
}

pub struct FakeStoreServer {
    server: MockServer,
    backend: Arc<Mutex<MemoryBackend>>,
}

impl FakeStoreServer {
    pub async fn start() -> Self {
        Self::start_with(Vec::new()).await
    }

    pub async fn start_with(complaints: Vec<Complaint>) -> Self {
        let server = MockServer::start().await;
        let backend = Arc::new(Mutex::new(MemoryBackend::with_complaints(complaints)));

        Mock::given(path(COLLECTION_PATH))
            .respond_with(StoreResponder {
                backend: backend.clone(),
            })
            .mount(&server)
            .await;

        Self { server, backend }
    }

    /// Full URL of the collection endpoint
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.server.uri(), COLLECTION_PATH)
    }

    pub fn complaints(&self) -> Vec<Complaint> {
        self.backend().complaints().to_vec()
    }

    pub fn request_count(&self, method: &str) -> usize {
        self.backend().request_count(method)
    }

    pub fn fail_next(&self, count: usize) {
        self.backend().fail_next(count);
    }

    fn backend(&self) -> std::sync::MutexGuard<'_, MemoryBackend> {
        self.backend.lock().expect("memory backend poisoned")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use complaintdesk_client::{ComplaintStore, HttpComplaintStore, StoreConfig};
    use complaintdesk_types::{ComplaintId, ComplaintKind, ComplaintStatus, NewComplaint, StatusUpdate};

    #[tokio::test]
    async fn test_created_complaint_is_listed_first() {
        let server = FakeStoreServer::start_with(fixtures::sample_complaints()).await;
        let store = HttpComplaintStore::new(StoreConfig::new(server.endpoint())).unwrap();

        store
            .create(&NewComplaint {
                title: "New".to_string(),
                description: "Body".to_string(),
                kind: ComplaintKind::FromGuard,
                photo: None,
            })
            .await
            .unwrap();
        let complaints = store.list().await.unwrap();

        assert_eq!(complaints.len(), 3);
        assert_eq!(complaints[0].title, "New");
        assert_eq!(server.request_count("POST"), 1);
    }

    #[tokio::test]
    async fn test_unknown_id_surfaces_as_not_found() {
        let server = FakeStoreServer::start().await;
        let store = HttpComplaintStore::new(StoreConfig::new(server.endpoint())).unwrap();

        let err = store
            .update_status(&StatusUpdate::new(
                ComplaintId::Number(42),
                ComplaintStatus::Review,
            ))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Not found: Complaint not found");
    }
}
