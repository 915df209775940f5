use std::fmt;

use complaintdesk_types::{Complaint, is_blank};

/// Largest photo accepted for upload (raw image bytes, before encoding).
pub const MAX_PHOTO_BYTES: usize = 5 * 1024 * 1024;

/// Input rejected locally, before any request reaches the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    EmptyTitle,
    EmptyDescription,
    PhotoTooLarge { size: usize, limit: usize },
    /// File extension does not name a supported image format
    UnsupportedPhotoType(String),
    EmptyResponse,
    /// A response can be attached only once.
    AlreadyResponded,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyTitle => write!(f, "Title must not be empty"),
            ValidationError::EmptyDescription => write!(f, "Description must not be empty"),
            ValidationError::PhotoTooLarge { size, limit } => write!(
                f,
                "Photo is too large: {:.1} MB (limit {} MB)",
                *size as f64 / (1024.0 * 1024.0),
                limit / (1024 * 1024)
            ),
            ValidationError::UnsupportedPhotoType(name) => {
                write!(f, "Unsupported photo type: {}", name)
            }
            ValidationError::EmptyResponse => write!(f, "Response text must not be empty"),
            ValidationError::AlreadyResponded => {
                write!(f, "Complaint already has a response")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Both required fields must contain something other than whitespace.
pub fn validate_complaint(title: &str, description: &str) -> Result<(), ValidationError> {
    if is_blank(title) {
        return Err(ValidationError::EmptyTitle);
    }
    if is_blank(description) {
        return Err(ValidationError::EmptyDescription);
    }
    Ok(())
}

pub fn check_photo_size(size: usize) -> Result<(), ValidationError> {
    if size > MAX_PHOTO_BYTES {
        return Err(ValidationError::PhotoTooLarge {
            size,
            limit: MAX_PHOTO_BYTES,
        });
    }
    Ok(())
}

/// Check a response about to be attached to `complaint`.
pub fn validate_response(complaint: &Complaint, text: &str) -> Result<(), ValidationError> {
    if is_blank(text) {
        return Err(ValidationError::EmptyResponse);
    }
    if complaint.has_response() {
        return Err(ValidationError::AlreadyResponded);
    }
    Ok(())
}
