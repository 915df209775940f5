use complaintdesk_client::{ComplaintStore, HttpComplaintStore, StoreConfig};
use complaintdesk_engine::{
    ComplaintDraft, ComplaintFilter, ComplaintStats, ValidationError, validate_response,
};
use complaintdesk_types::{Complaint, ComplaintId, ComplaintStatus, ResponseUpdate, StatusUpdate};
use std::collections::HashSet;
use tracing::{debug, info, warn};

use crate::notice::Notice;
use crate::{Error, Result};

/// Application state of the complaint desk.
///
/// The collection is only ever replaced wholesale by a fresh snapshot from
/// the store. Every mutating action takes `&mut self`, so one desk runs at
/// most one action at a time.
pub struct Desk<S> {
    store: S,
    collection: Vec<Complaint>,
    filter: ComplaintFilter,
    selection: Option<String>,
    draft: ComplaintDraft,
    response_draft: String,
    /// Responses the store accepted that the snapshot does not show yet
    answered: HashSet<ComplaintId>,
}

impl Desk<HttpComplaintStore> {
    /// Open a desk against the HTTP store at `endpoint` and load the collection.
    pub async fn connect(endpoint: &str) -> Result<Self> {
        let store = HttpComplaintStore::new(StoreConfig::new(endpoint))?;
        Self::open(store).await
    }
}

impl<S: ComplaintStore> Desk<S> {
    /// Create a desk with an empty collection; nothing is fetched yet.
    pub fn new(store: S) -> Self {
        Self {
            store,
            collection: Vec::new(),
            filter: ComplaintFilter::default(),
            selection: None,
            draft: ComplaintDraft::default(),
            response_draft: String::new(),
            answered: HashSet::new(),
        }
    }

    /// Create a desk and load the collection.
    pub async fn open(store: S) -> Result<Self> {
        let mut desk = Self::new(store);
        desk.refresh().await?;
        Ok(desk)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Replace the collection with the store's current snapshot.
    ///
    /// On failure the previous snapshot is kept.
    pub async fn refresh(&mut self) -> Result<()> {
        let complaints = self.store.list().await?;
        debug!(count = complaints.len(), "collection refreshed");
        self.collection = complaints;
        self.answered.clear();
        Ok(())
    }

    /// Full collection in store order
    pub fn complaints(&self) -> &[Complaint] {
        &self.collection
    }

    pub fn find(&self, id: &str) -> Option<&Complaint> {
        self.collection.iter().find(|c| c.id.matches(id))
    }

    fn require(&self, id: &str) -> Result<&Complaint> {
        self.find(id)
            .ok_or_else(|| Error::UnknownComplaint(id.to_string()))
    }

    pub fn filter(&self) -> &ComplaintFilter {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: ComplaintFilter) {
        self.filter = filter;
    }

    /// Complaints passing the current filter, recomputed on every call.
    pub fn visible(&self) -> Vec<&Complaint> {
        self.filter.apply(&self.collection)
    }

    /// Statistics over the whole collection, ignoring the filter.
    pub fn stats(&self) -> ComplaintStats {
        ComplaintStats::from_complaints(&self.collection)
    }

    pub fn draft(&self) -> &ComplaintDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut ComplaintDraft {
        &mut self.draft
    }

    /// Submit the draft as a new complaint.
    ///
    /// Validation failures never reach the store. After the store accepts the
    /// complaint the draft is reset and the collection refreshed.
    pub async fn submit(&mut self) -> Result<Notice> {
        let request = self.draft.to_request()?;

        let created = self.store.create(&request).await?;
        info!(id = %created.id, kind = %created.kind, "complaint submitted");

        self.draft.reset();
        self.refresh().await?;

        Ok(Notice::success(
            "Complaint submitted",
            format!("Complaint {} is waiting for review", created.id),
        )
        .about(created.id))
    }

    pub async fn change_status(&mut self, id: &str, status: ComplaintStatus) -> Result<Notice> {
        let complaint_id = self.require(id)?.id.clone();

        self.store
            .update_status(&StatusUpdate::new(complaint_id.clone(), status))
            .await?;
        info!(id = %complaint_id, %status, "status updated");

        self.refresh().await?;

        Ok(Notice::success(
            "Status updated",
            format!("Complaint {} is now {}", complaint_id, status.label()),
        )
        .about(complaint_id))
    }

    /// Open a complaint in the detail view.
    pub fn select(&mut self, id: &str) -> Result<&Complaint> {
        let index = self
            .collection
            .iter()
            .position(|c| c.id.matches(id))
            .ok_or_else(|| Error::UnknownComplaint(id.to_string()))?;

        self.selection = Some(id.to_string());
        Ok(&self.collection[index])
    }

    pub fn deselect(&mut self) {
        self.selection = None;
    }

    /// Selected complaint as found in the current snapshot.
    pub fn selected(&self) -> Option<&Complaint> {
        self.selection.as_deref().and_then(|id| self.find(id))
    }

    pub fn set_response_text(&mut self, text: impl Into<String>) {
        self.response_draft = text.into();
    }

    pub fn response_text(&self) -> &str {
        &self.response_draft
    }

    /// Attach the response draft to complaint `id`, resolving it.
    ///
    /// Once the store accepts the response the draft is cleared and the
    /// selection dropped, even if the refresh that follows fails. A rejected
    /// request keeps both. A complaint answered through this desk cannot be
    /// answered again, also while the snapshot is stale.
    pub async fn submit_response(&mut self, id: &str) -> Result<Notice> {
        let complaint = self.require(id)?;
        validate_response(complaint, &self.response_draft)?;
        if self.answered.contains(&complaint.id) {
            return Err(ValidationError::AlreadyResponded.into());
        }
        let update = ResponseUpdate::new(complaint.id.clone(), self.response_draft.clone());

        self.store.submit_response(&update).await?;
        info!(id = %update.id, "response sent");

        self.response_draft.clear();
        self.selection = None;
        self.answered.insert(update.id.clone());

        if let Err(err) = self.refresh().await {
            warn!(id = %update.id, error = %err, "response stored but refresh failed");
            return Err(err);
        }

        Ok(Notice::success(
            "Response sent",
            format!("Complaint {} is resolved", update.id),
        )
        .about(update.id))
    }
}
