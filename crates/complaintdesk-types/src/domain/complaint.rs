use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::photo::deserialize_optional_photo;
use super::{ComplaintId, ComplaintKind, ComplaintStatus, Photo};
use crate::util::deserialize_non_empty;

/// A single grievance as held by the collaborator store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Complaint {
    pub id: ComplaintId,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: ComplaintKind,
    pub status: ComplaintStatus,
    /// Creation date, `YYYY-MM-DD`
    pub date: NaiveDate,
    #[serde(
        default,
        deserialize_with = "deserialize_non_empty",
        skip_serializing_if = "Option::is_none"
    )]
    pub response: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_photo",
        skip_serializing_if = "Option::is_none"
    )]
    pub photo: Option<Photo>,
}

impl Complaint {
    pub fn has_response(&self) -> bool {
        self.response.is_some()
    }

    pub fn has_photo(&self) -> bool {
        self.photo.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_store_row() {
        let value = json!({
            "id": 3,
            "title": "Rude behaviour",
            "description": "Guard shouted at a visitor",
            "type": "against_guard",
            "status": "pending",
            "photo": "",
            "response": null,
            "date": "2025-10-08"
        });

        let complaint: Complaint = serde_json::from_value(value).unwrap();
        assert_eq!(complaint.id, ComplaintId::Number(3));
        assert_eq!(complaint.kind, ComplaintKind::AgainstGuard);
        assert_eq!(complaint.date, NaiveDate::from_ymd_opt(2025, 10, 8).unwrap());
        assert!(!complaint.has_response());
        assert!(!complaint.has_photo());
    }

    #[test]
    fn test_missing_optional_fields_decode_as_absent() {
        let value = json!({
            "id": "1",
            "title": "t",
            "description": "d",
            "type": "from_guard",
            "status": "resolved",
            "date": "2025-10-09",
            "response": "Handled"
        });

        let complaint: Complaint = serde_json::from_value(value).unwrap();
        assert_eq!(complaint.response.as_deref(), Some("Handled"));
        assert!(complaint.photo.is_none());
    }

    #[test]
    fn test_absent_fields_are_not_serialized() {
        let complaint = Complaint {
            id: ComplaintId::Number(1),
            title: "t".to_string(),
            description: "d".to_string(),
            kind: ComplaintKind::FromGuard,
            status: ComplaintStatus::Review,
            date: NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(),
            response: None,
            photo: None,
        };

        let value = serde_json::to_value(&complaint).unwrap();
        assert_eq!(value["type"], "from_guard");
        assert_eq!(value["date"], "2025-01-02");
        assert!(value.get("response").is_none());
        assert!(value.get("photo").is_none());
    }
}
