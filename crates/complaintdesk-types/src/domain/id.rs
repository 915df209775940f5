use serde::{Deserialize, Serialize};
use std::fmt;

/// Store-assigned complaint identifier.
///
/// The store is free to hand out numeric (serial) or string identifiers.
/// The original JSON representation is preserved so that update requests
/// echo the id back exactly as it was received.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ComplaintId {
    Number(i64),
    Text(String),
}

impl ComplaintId {
    /// True when `raw` is the textual form of this id (as typed on a command line).
    /// Surrounding whitespace is ignored.
    pub fn matches(&self, raw: &str) -> bool {
        let raw = raw.trim();
        match self {
            ComplaintId::Number(n) => raw.parse::<i64>().is_ok_and(|parsed| parsed == *n),
            ComplaintId::Text(s) => s == raw,
        }
    }
}

impl fmt::Display for ComplaintId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComplaintId::Number(n) => write!(f, "{}", n),
            ComplaintId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for ComplaintId {
    fn from(value: i64) -> Self {
        ComplaintId::Number(value)
    }
}

impl From<&str> for ComplaintId {
    fn from(value: &str) -> Self {
        ComplaintId::Text(value.to_string())
    }
}

impl From<String> for ComplaintId {
    fn from(value: String) -> Self {
        ComplaintId::Text(value)
    }
}
