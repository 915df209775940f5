use complaintdesk_client::StoreError;
use complaintdesk_engine::ValidationError;
use std::fmt;

/// Result type for complaintdesk-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// Input rejected before any request was made
    Validation(ValidationError),

    /// Store request failed
    Network(StoreError),

    /// Id not present in the current snapshot
    UnknownComplaint(String),

    /// Configuration error
    Config(String),

    /// IO operation failed
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Validation(err) => write!(f, "{}", err),
            Error::Network(err) => write!(f, "Network error: {}", err),
            Error::UnknownComplaint(id) => write!(f, "Complaint not found: {}", id),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Validation(err) => Some(err),
            Error::Network(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::UnknownComplaint(_) | Error::Config(_) => None,
        }
    }
}

impl From<ValidationError> for Error {
    fn from(err: ValidationError) -> Self {
        Error::Validation(err)
    }
}

impl From<StoreError> for Error {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::InvalidEndpoint(endpoint) => {
                Error::Config(format!("invalid store endpoint '{}'", endpoint))
            }
            other => Error::Network(other),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}
