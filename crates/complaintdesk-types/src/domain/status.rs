use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Review state of a complaint.
///
/// Transitions are unordered: any status can be set from any other.
/// Attaching a response always forces `Resolved`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplaintStatus {
    Pending,
    Review,
    Resolved,
}

impl ComplaintStatus {
    pub const ALL: [ComplaintStatus; 3] = [
        ComplaintStatus::Pending,
        ComplaintStatus::Review,
        ComplaintStatus::Resolved,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComplaintStatus::Pending => "pending",
            ComplaintStatus::Review => "review",
            ComplaintStatus::Resolved => "resolved",
        }
    }

    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            ComplaintStatus::Pending => "Pending",
            ComplaintStatus::Review => "Needs review",
            ComplaintStatus::Resolved => "Resolved",
        }
    }
}

impl Default for ComplaintStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl fmt::Display for ComplaintStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ComplaintStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ComplaintStatus::Pending),
            "review" => Ok(ComplaintStatus::Review),
            "resolved" => Ok(ComplaintStatus::Resolved),
            other => Err(Error::InvalidStatus(other.to_string())),
        }
    }
}
