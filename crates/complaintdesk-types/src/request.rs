//! Request bodies sent to the collaborator store.

use serde::{Deserialize, Serialize};

use crate::{ComplaintId, ComplaintKind, ComplaintStatus, Photo};

/// `POST` body: the store assigns `id`, `date` and `status = pending`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewComplaint {
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: ComplaintKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<Photo>,
}

/// `PUT` body that only moves a complaint to another status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub id: ComplaintId,
    pub status: ComplaintStatus,
}

impl StatusUpdate {
    pub fn new(id: ComplaintId, status: ComplaintStatus) -> Self {
        Self { id, status }
    }
}

/// `PUT` body that attaches an administrator response.
///
/// The only constructor is [`ResponseUpdate::new`], so every update carries
/// `status = resolved`. It is serialize-only for the same reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResponseUpdate {
    pub id: ComplaintId,
    pub response: String,
    status: ComplaintStatus,
}

impl ResponseUpdate {
    pub fn new(id: ComplaintId, response: impl Into<String>) -> Self {
        Self {
            id,
            response: response.into(),
            status: ComplaintStatus::Resolved,
        }
    }

    pub fn status(&self) -> ComplaintStatus {
        self.status
    }
}
