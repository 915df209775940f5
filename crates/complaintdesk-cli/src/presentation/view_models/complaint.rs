use serde::Serialize;

/// One complaint as shown in lists and the detail view.
///
/// Keywords (`status`, `kind`) are the wire values; labels are for humans.
#[derive(Debug, Clone, Serialize)]
pub struct ComplaintEntry {
    pub id: String,
    pub title: String,
    pub description: String,
    pub kind: String,
    pub kind_label: String,
    pub status: String,
    pub status_label: String,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    pub has_photo: bool,
}

#[derive(Debug, Serialize)]
pub struct FilterSummary {
    pub status: String,
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ComplaintListViewModel {
    pub complaints: Vec<ComplaintEntry>,
    /// Size of the unfiltered collection
    pub total: usize,
    pub filter: FilterSummary,
}

#[derive(Debug, Serialize)]
pub struct PhotoSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    pub size_bytes: usize,
}

#[derive(Debug, Serialize)]
pub struct NoticeViewModel {
    pub level: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct ComplaintDetailViewModel {
    pub complaint: ComplaintEntry,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<PhotoSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<NoticeViewModel>,
}
