//! In-memory collaborator store.
//!
//! `MemoryBackend` answers requests with the same rules as the production
//! store: required fields are trimmed and must be non-blank, new complaints
//! start `pending` with today's date, the newest complaint is listed first,
//! and unknown ids are a 404. It speaks in raw JSON bodies and status codes so
//! the same backend can sit behind `InMemoryStore` (direct calls) and
//! `FakeStoreServer` (real HTTP).

use async_trait::async_trait;
use chrono::Utc;
use complaintdesk_client::{ComplaintStore, Result as StoreResult, StoreError};
use complaintdesk_types::{
    Complaint, ComplaintId, ComplaintKind, ComplaintStatus, NewComplaint, Photo, ResponseUpdate,
    StatusUpdate,
};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex, MutexGuard};

/// A request as seen by the backend
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub body: Value,
}

#[derive(Debug, Default)]
pub struct MemoryBackend {
    complaints: Vec<Complaint>,
    next_id: i64,
    failures_remaining: usize,
    list_failures_remaining: usize,
    requests: Vec<RecordedRequest>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::with_complaints(Vec::new())
    }

    /// Seed the collection; the given order is the list order.
    pub fn with_complaints(complaints: Vec<Complaint>) -> Self {
        let next_id = complaints
            .iter()
            .filter_map(|c| c.id.to_string().parse::<i64>().ok())
            .max()
            .unwrap_or(0)
            + 1;

        Self {
            complaints,
            next_id,
            ..Default::default()
        }
    }

    pub fn complaints(&self) -> &[Complaint] {
        &self.complaints
    }

    pub fn requests(&self) -> &[RecordedRequest] {
        &self.requests
    }

    pub fn request_count(&self, method: &str) -> usize {
        self.requests.iter().filter(|r| r.method == method).count()
    }

    /// Answer the next `count` requests with a 500.
    pub fn fail_next(&mut self, count: usize) {
        self.failures_remaining = count;
    }

    /// Answer the next `count` GET requests with a 503; writes still succeed.
    pub fn fail_next_lists(&mut self, count: usize) {
        self.list_failures_remaining = count;
    }

    /// Handle one request against the collection endpoint.
    pub fn handle(&mut self, method: &str, body: &[u8]) -> (u16, Value) {
        let body: Value = if body.is_empty() {
            json!({})
        } else {
            match serde_json::from_slice(body) {
                Ok(value) => value,
                Err(_) => return error(400, "Invalid JSON body"),
            }
        };

        self.requests.push(RecordedRequest {
            method: method.to_string(),
            body: body.clone(),
        });

        if self.failures_remaining > 0 {
            self.failures_remaining -= 1;
            return error(500, "Internal server error");
        }

        if method == "GET" && self.list_failures_remaining > 0 {
            self.list_failures_remaining -= 1;
            return error(503, "Service unavailable");
        }

        match method {
            "GET" => (200, json!(self.complaints)),
            "POST" => self.create(&body),
            "PUT" => self.update(&body),
            _ => error(405, "Method not allowed"),
        }
    }

    fn create(&mut self, body: &Value) -> (u16, Value) {
        let title = trimmed(body, "title");
        let description = trimmed(body, "description");
        let kind = trimmed(body, "type");

        if title.is_empty() || description.is_empty() || kind.is_empty() {
            return error(400, "Missing required fields");
        }
        let Ok(kind) = kind.parse::<ComplaintKind>() else {
            return error(400, "Invalid complaint type");
        };

        let photo = match body.get("photo").and_then(Value::as_str) {
            None | Some("") => None,
            Some(uri) => match Photo::from_data_uri(uri) {
                Ok(photo) => Some(photo),
                Err(_) => return error(400, "Invalid photo"),
            },
        };

        let complaint = Complaint {
            id: ComplaintId::Number(self.next_id),
            title,
            description,
            kind,
            status: ComplaintStatus::Pending,
            date: Utc::now().date_naive(),
            response: None,
            photo,
        };
        self.next_id += 1;

        // Newest first
        self.complaints.insert(0, complaint.clone());
        (201, json!(complaint))
    }

    fn update(&mut self, body: &Value) -> (u16, Value) {
        let id = match body.get("id") {
            None | Some(Value::Null) => return error(400, "Missing complaint id"),
            Some(Value::String(s)) if s.is_empty() => {
                return error(400, "Missing complaint id");
            }
            Some(id) => id_key(id),
        };

        let status = match body.get("status").and_then(Value::as_str) {
            None | Some("") => None,
            Some(raw) => match raw.parse::<ComplaintStatus>() {
                Ok(status) => Some(status),
                Err(_) => return error(400, "Invalid status"),
            },
        };
        let response = body
            .get("response")
            .and_then(Value::as_str)
            .map(str::to_string);

        // The id column coerces strings, so compare textual forms.
        let Some(complaint) = self.complaints.iter_mut().find(|c| c.id.to_string() == id) else {
            return error(404, "Complaint not found");
        };

        if let Some(status) = status {
            complaint.status = status;
        }
        if let Some(response) = response {
            complaint.response = Some(response);
        }
        (200, json!(complaint))
    }
}

fn trimmed(body: &Value, field: &str) -> String {
    body.get(field)
        .and_then(Value::as_str)
        .unwrap_or("")
        .trim()
        .to_string()
}

fn id_key(id: &Value) -> String {
    match id {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn error(status: u16, message: &str) -> (u16, Value) {
    (status, json!({ "error": message }))
}

/// `ComplaintStore` backed by a shared `MemoryBackend`.
///
/// Clones share the same backend, so a test can keep one handle for
/// assertions while the code under test owns another.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    backend: Arc<Mutex<MemoryBackend>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_complaints(complaints: Vec<Complaint>) -> Self {
        Self {
            backend: Arc::new(Mutex::new(MemoryBackend::with_complaints(complaints))),
        }
    }

    pub fn backend(&self) -> MutexGuard<'_, MemoryBackend> {
        self.backend.lock().expect("memory backend poisoned")
    }

    /// Current server-side collection
    pub fn snapshot(&self) -> Vec<Complaint> {
        self.backend().complaints().to_vec()
    }

    pub fn fail_next(&self, count: usize) {
        self.backend().fail_next(count);
    }

    /// Fail the next `count` listings while writes keep going through.
    pub fn fail_next_lists(&self, count: usize) {
        self.backend().fail_next_lists(count);
    }

    pub fn request_count(&self, method: &str) -> usize {
        self.backend().request_count(method)
    }

    fn call<T>(&self, method: &str, body: &impl serde::Serialize) -> StoreResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let bytes = serde_json::to_vec(body)?;
        let (status, reply) = self.backend().handle(method, &bytes);
        decode(status, reply)
    }
}

fn decode<T: serde::de::DeserializeOwned>(status: u16, reply: Value) -> StoreResult<T> {
    if (200..300).contains(&status) {
        return Ok(serde_json::from_value(reply)?);
    }

    let message = reply["error"].as_str().unwrap_or_default().to_string();
    if status == 404 {
        return Err(StoreError::NotFound(message));
    }
    Err(StoreError::Server { status, message })
}

#[async_trait]
impl ComplaintStore for InMemoryStore {
    async fn list(&self) -> StoreResult<Vec<Complaint>> {
        let (status, reply) = self.backend().handle("GET", &[]);
        decode(status, reply)
    }

    async fn create(&self, complaint: &NewComplaint) -> StoreResult<Complaint> {
        self.call("POST", complaint)
    }

    async fn update_status(&self, update: &StatusUpdate) -> StoreResult<Complaint> {
        self.call("PUT", update)
    }

    async fn submit_response(&self, update: &ResponseUpdate) -> StoreResult<Complaint> {
        self.call("PUT", update)
    }
}
