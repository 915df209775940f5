use serde::Serialize;

use complaintdesk_types::{Complaint, ComplaintKind, ComplaintStatus};

/// Counts over the full, unfiltered collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ComplaintStats {
    pub total: usize,
    pub pending: usize,
    pub review: usize,
    pub resolved: usize,
    pub against_guard: usize,
    pub from_guard: usize,
}

impl ComplaintStats {
    pub fn from_complaints(complaints: &[Complaint]) -> Self {
        let mut stats = Self::default();
        for complaint in complaints {
            stats.total += 1;
            match complaint.status {
                ComplaintStatus::Pending => stats.pending += 1,
                ComplaintStatus::Review => stats.review += 1,
                ComplaintStatus::Resolved => stats.resolved += 1,
            }
            match complaint.kind {
                ComplaintKind::AgainstGuard => stats.against_guard += 1,
                ComplaintKind::FromGuard => stats.from_guard += 1,
            }
        }
        stats
    }

    pub fn by_status(&self, status: ComplaintStatus) -> usize {
        match status {
            ComplaintStatus::Pending => self.pending,
            ComplaintStatus::Review => self.review,
            ComplaintStatus::Resolved => self.resolved,
        }
    }

    pub fn by_kind(&self, kind: ComplaintKind) -> usize {
        match kind {
            ComplaintKind::AgainstGuard => self.against_guard,
            ComplaintKind::FromGuard => self.from_guard,
        }
    }
}
