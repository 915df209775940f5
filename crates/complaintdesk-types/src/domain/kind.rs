use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Direction of a complaint. Fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplaintKind {
    /// Filed by a visitor about an on-duty guard
    AgainstGuard,
    /// Filed by an on-duty guard
    FromGuard,
}

impl ComplaintKind {
    pub const ALL: [ComplaintKind; 2] = [ComplaintKind::AgainstGuard, ComplaintKind::FromGuard];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComplaintKind::AgainstGuard => "against_guard",
            ComplaintKind::FromGuard => "from_guard",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ComplaintKind::AgainstGuard => "Against guard",
            ComplaintKind::FromGuard => "From guard",
        }
    }
}

impl Default for ComplaintKind {
    fn default() -> Self {
        Self::AgainstGuard
    }
}

impl fmt::Display for ComplaintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ComplaintKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "against_guard" => Ok(ComplaintKind::AgainstGuard),
            "from_guard" => Ok(ComplaintKind::FromGuard),
            other => Err(Error::InvalidKind(other.to_string())),
        }
    }
}
