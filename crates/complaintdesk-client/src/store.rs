use async_trait::async_trait;
use complaintdesk_types::{Complaint, NewComplaint, ResponseUpdate, StatusUpdate};

use crate::error::Result;

/// Remote collection of complaints.
///
/// Each call is a single request; there is no retry and no caching.
/// Callers re-read the full collection with [`ComplaintStore::list`] after a
/// successful write instead of trusting the returned record.
#[async_trait]
pub trait ComplaintStore: Send + Sync {
    /// Full collection in store order
    async fn list(&self) -> Result<Vec<Complaint>>;

    /// Create a complaint; the store assigns id, date and `pending` status
    async fn create(&self, complaint: &NewComplaint) -> Result<Complaint>;

    async fn update_status(&self, update: &StatusUpdate) -> Result<Complaint>;

    /// Attach a response; the complaint becomes `resolved` in the same write
    async fn submit_response(&self, update: &ResponseUpdate) -> Result<Complaint>;
}
