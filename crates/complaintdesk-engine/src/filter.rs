use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use complaintdesk_types::{Complaint, ComplaintKind, ComplaintStatus};

/// Either every value or exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldFilter<T> {
    #[default]
    All,
    Only(T),
}

pub type StatusFilter = FieldFilter<ComplaintStatus>;
pub type KindFilter = FieldFilter<ComplaintKind>;

impl<T: PartialEq> FieldFilter<T> {
    pub fn accepts(&self, value: &T) -> bool {
        match self {
            FieldFilter::All => true,
            FieldFilter::Only(expected) => expected == value,
        }
    }
}

impl<T> FromStr for FieldFilter<T>
where
    T: FromStr,
{
    type Err = T::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(FieldFilter::All);
        }
        s.parse().map(FieldFilter::Only)
    }
}

impl<T: fmt::Display> fmt::Display for FieldFilter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldFilter::All => write!(f, "all"),
            FieldFilter::Only(value) => write!(f, "{}", value),
        }
    }
}

/// List-view predicates. All active predicates must hold (logical AND).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ComplaintFilter {
    pub status: StatusFilter,
    pub kind: KindFilter,
    pub search: String,
}

impl ComplaintFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    pub fn kind(mut self, kind: KindFilter) -> Self {
        self.kind = kind;
        self
    }

    pub fn search(mut self, query: impl Into<String>) -> Self {
        self.search = query.into();
        self
    }

    pub fn is_active(&self) -> bool {
        self.status != FieldFilter::All
            || self.kind != FieldFilter::All
            || !self.search.trim().is_empty()
    }

    pub fn matches(&self, complaint: &Complaint) -> bool {
        self.status.accepts(&complaint.status)
            && self.kind.accepts(&complaint.kind)
            && matches_query(complaint, &self.search)
    }

    /// Complaints satisfying every predicate, in store order.
    pub fn apply<'a>(&self, complaints: &'a [Complaint]) -> Vec<&'a Complaint> {
        complaints.iter().filter(|c| self.matches(c)).collect()
    }
}

/// Case-insensitive substring match on title or description.
/// A blank query matches everything.
fn matches_query(complaint: &Complaint, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    complaint.title.to_lowercase().contains(&needle)
        || complaint.description.to_lowercase().contains(&needle)
}
