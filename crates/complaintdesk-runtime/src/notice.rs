use complaintdesk_types::ComplaintId;
use serde::Serialize;

use crate::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Error,
}

/// Short user-facing outcome of an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub description: String,
    /// Complaint the action was about
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<ComplaintId>,
}

impl Notice {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            title: title.into(),
            description: description.into(),
            subject: None,
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            title: title.into(),
            description: description.into(),
            subject: None,
        }
    }

    pub fn about(mut self, id: ComplaintId) -> Self {
        self.subject = Some(id);
        self
    }

    pub fn is_success(&self) -> bool {
        self.level == NoticeLevel::Success
    }
}

impl From<&Error> for Notice {
    fn from(err: &Error) -> Self {
        let title = match err {
            Error::Validation(_) => "Check your input",
            Error::Network(_) => "Request failed",
            Error::UnknownComplaint(_) => "Complaint not found",
            Error::Config(_) => "Configuration error",
            Error::Io(_) => "File error",
        };
        Notice::error(title, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use complaintdesk_engine::ValidationError;

    #[test]
    fn test_error_notice_carries_message() {
        let notice = Notice::from(&Error::Validation(ValidationError::EmptyTitle));

        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(notice.title, "Check your input");
        assert_eq!(notice.description, "Title must not be empty");
        assert!(!notice.is_success());
    }
}
