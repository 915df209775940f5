use complaintdesk_types::{ComplaintKind, NewComplaint, Photo};

use crate::validation::{ValidationError, check_photo_size, validate_complaint};

/// Submission form contents, kept until the complaint is accepted by the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComplaintDraft {
    pub title: String,
    pub description: String,
    pub kind: ComplaintKind,
    photo: Option<Photo>,
}

impl ComplaintDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn kind(mut self, kind: ComplaintKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn photo(&self) -> Option<&Photo> {
        self.photo.as_ref()
    }

    /// Attach image bytes, replacing any earlier photo.
    ///
    /// An oversized image clears the photo field and is not kept.
    pub fn attach_photo(&mut self, bytes: &[u8], mime_type: &str) -> Result<(), ValidationError> {
        if let Err(err) = check_photo_size(bytes.len()) {
            self.photo = None;
            return Err(err);
        }
        self.photo = Some(Photo::from_bytes(bytes, mime_type));
        Ok(())
    }

    pub fn clear_photo(&mut self) {
        self.photo = None;
    }

    /// Validate and build the create request body.
    pub fn to_request(&self) -> Result<NewComplaint, ValidationError> {
        validate_complaint(&self.title, &self.description)?;
        Ok(NewComplaint {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            kind: self.kind,
            photo: self.photo.clone(),
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::MAX_PHOTO_BYTES;

    #[test]
    fn test_defaults() {
        let draft = ComplaintDraft::new();
        assert_eq!(draft.kind, ComplaintKind::AgainstGuard);
        assert!(draft.title.is_empty());
        assert!(draft.photo().is_none());
    }

    #[test]
    fn test_to_request_trims_fields() {
        let draft = ComplaintDraft::new()
            .title("  Late shift change ")
            .description("\tPost left unattended\n")
            .kind(ComplaintKind::FromGuard);

        let request = draft.to_request().unwrap();
        assert_eq!(request.title, "Late shift change");
        assert_eq!(request.description, "Post left unattended");
        assert_eq!(request.kind, ComplaintKind::FromGuard);
        assert!(request.photo.is_none());
    }

    #[test]
    fn test_to_request_rejects_empty_fields() {
        assert_eq!(
            ComplaintDraft::new().description("body").to_request(),
            Err(ValidationError::EmptyTitle)
        );
        assert_eq!(
            ComplaintDraft::new().title("title").to_request(),
            Err(ValidationError::EmptyDescription)
        );
    }

    #[test]
    fn test_oversized_photo_leaves_field_empty() {
        let mut draft = ComplaintDraft::new();
        draft.attach_photo(b"small", "image/png").unwrap();
        assert!(draft.photo().is_some());

        let big = vec![0u8; MAX_PHOTO_BYTES + 1];
        let err = draft.attach_photo(&big, "image/jpeg").unwrap_err();

        assert!(matches!(err, ValidationError::PhotoTooLarge { .. }));
        assert!(draft.photo().is_none());
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut draft = ComplaintDraft::new().title("t").description("d");
        draft.attach_photo(b"img", "image/gif").unwrap();

        draft.reset();
        assert_eq!(draft, ComplaintDraft::default());
    }
}
