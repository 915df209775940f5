//! Sample data for tests.

use chrono::NaiveDate;
use complaintdesk_types::{Complaint, ComplaintId, ComplaintKind, ComplaintStatus, Photo};

/// The two records the desk ships with as demo data.
pub fn sample_complaints() -> Vec<Complaint> {
    vec![
        complaint(1)
            .title("Грубое обращение с посетителями")
            .description(
                "Дежурный Иванов И.И. нагрубил посетителю в фойе здания без видимой причины.",
            )
            .kind(ComplaintKind::AgainstGuard)
            .status(ComplaintStatus::Review)
            .date(2025, 10, 8)
            .build(),
        complaint(2)
            .title("Нарушение пропускного режима")
            .description(
                "Сотрудник Петров пытался провести постороннее лицо без оформления пропуска.",
            )
            .kind(ComplaintKind::FromGuard)
            .status(ComplaintStatus::Pending)
            .date(2025, 10, 9)
            .build(),
    ]
}

/// Start building a complaint with a numeric id and neutral defaults.
pub fn complaint(id: i64) -> ComplaintBuilder {
    ComplaintBuilder::new(ComplaintId::Number(id))
}

pub struct ComplaintBuilder {
    complaint: Complaint,
}

impl ComplaintBuilder {
    pub fn new(id: ComplaintId) -> Self {
        let title = format!("Complaint {}", id);
        Self {
            complaint: Complaint {
                id,
                title,
                description: "No details".to_string(),
                kind: ComplaintKind::AgainstGuard,
                status: ComplaintStatus::Pending,
                date: NaiveDate::from_ymd_opt(2025, 10, 1).expect("valid date"),
                response: None,
                photo: None,
            },
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.complaint.title = title.to_string();
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.complaint.description = description.to_string();
        self
    }

    pub fn kind(mut self, kind: ComplaintKind) -> Self {
        self.complaint.kind = kind;
        self
    }

    pub fn status(mut self, status: ComplaintStatus) -> Self {
        self.complaint.status = status;
        self
    }

    pub fn date(mut self, year: i32, month: u32, day: u32) -> Self {
        self.complaint.date = NaiveDate::from_ymd_opt(year, month, day).expect("valid date");
        self
    }

    /// Attach a response; like the store, this also resolves the complaint.
    pub fn response(mut self, response: &str) -> Self {
        self.complaint.response = Some(response.to_string());
        self.complaint.status = ComplaintStatus::Resolved;
        self
    }

    pub fn photo(mut self, bytes: &[u8], mime_type: &str) -> Self {
        self.complaint.photo = Some(Photo::from_bytes(bytes, mime_type));
        self
    }

    pub fn build(self) -> Complaint {
        self.complaint
    }
}
