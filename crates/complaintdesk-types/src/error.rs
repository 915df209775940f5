use std::fmt;

/// Result type for complaintdesk-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Unrecognized complaint status keyword
    InvalidStatus(String),

    /// Unrecognized complaint type keyword
    InvalidKind(String),

    /// Value is not a base64 `data:` URI
    InvalidPhoto(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidStatus(value) => write!(
                f,
                "Invalid status '{}': expected one of pending, review, resolved",
                value
            ),
            Error::InvalidKind(value) => write!(
                f,
                "Invalid complaint type '{}': expected against_guard or from_guard",
                value
            ),
            Error::InvalidPhoto(msg) => write!(f, "Invalid photo: {}", msg),
        }
    }
}

impl std::error::Error for Error {}
