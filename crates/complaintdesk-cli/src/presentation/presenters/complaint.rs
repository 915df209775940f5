use crate::args::hints::cmd;
use crate::presentation::view_models::{
    CommandResultViewModel, ComplaintDetailViewModel, ComplaintEntry, ComplaintListViewModel,
    FilterSummary, NoticeViewModel, PhotoSummary, StatusBadge,
};
use complaintdesk_engine::ComplaintFilter;
use complaintdesk_runtime::{Notice, NoticeLevel};
use complaintdesk_types::{Complaint, ComplaintStatus};

fn entry(complaint: &Complaint) -> ComplaintEntry {
    ComplaintEntry {
        id: complaint.id.to_string(),
        title: complaint.title.clone(),
        description: complaint.description.clone(),
        kind: complaint.kind.as_str().to_string(),
        kind_label: complaint.kind.label().to_string(),
        status: complaint.status.as_str().to_string(),
        status_label: complaint.status.label().to_string(),
        date: complaint.date.to_string(),
        response: complaint.response.clone(),
        has_photo: complaint.has_photo(),
    }
}

fn notice_view(notice: &Notice) -> NoticeViewModel {
    let level = match notice.level {
        NoticeLevel::Success => "success",
        NoticeLevel::Error => "error",
    };
    NoticeViewModel {
        level: level.to_string(),
        title: notice.title.clone(),
        description: notice.description.clone(),
    }
}

pub fn present_complaint_list(
    visible: &[&Complaint],
    total: usize,
    filter: &ComplaintFilter,
) -> CommandResultViewModel<ComplaintListViewModel> {
    let search = Some(filter.search.trim())
        .filter(|q| !q.is_empty())
        .map(str::to_string);

    let content = ComplaintListViewModel {
        complaints: visible.iter().map(|c| entry(c)).collect(),
        total,
        filter: FilterSummary {
            status: filter.status.to_string(),
            kind: filter.kind.to_string(),
            search,
        },
    };

    let shown = content.complaints.len();
    let has_pending = visible.iter().any(|c| c.status == ComplaintStatus::Pending);
    let mut result = CommandResultViewModel::new(content);

    if total == 0 {
        return result
            .with_badge(StatusBadge::info("No complaints yet"))
            .with_hint("Submit the first complaint", cmd::SUBMIT);
    }

    if shown == 0 {
        return result
            .with_badge(StatusBadge::warning("No complaints match the filter"))
            .with_hint("List everything", cmd::LIST);
    }

    let label = if filter.is_active() {
        format!("{} of {} complaints", shown, total)
    } else {
        format!("{} complaints", shown)
    };
    result = result.with_badge(StatusBadge::info(label));

    if has_pending {
        result = result.with_hint("Open a complaint to review or answer it", cmd::SHOW);
    }

    result
}

/// Detail view of one complaint, optionally reporting the action that just ran on it.
pub fn present_complaint_detail(
    complaint: &Complaint,
    notice: Option<&Notice>,
) -> CommandResultViewModel<ComplaintDetailViewModel> {
    let photo = complaint.photo.as_ref().map(|p| PhotoSummary {
        mime_type: p.mime_type().map(str::to_string),
        size_bytes: p.decoded_len(),
    });

    let content = ComplaintDetailViewModel {
        complaint: entry(complaint),
        photo,
        notice: notice.map(notice_view),
    };

    let mut result = CommandResultViewModel::new(content);

    if let Some(notice) = notice {
        result = result.with_badge(StatusBadge::success(notice.title.clone()));
    }

    if !complaint.has_response() {
        result = result.with_hint("Answer the complaint to resolve it", cmd::RESPOND);
    }
    if complaint.status == ComplaintStatus::Pending {
        result = result.with_hint("Mark it as under review", cmd::STATUS);
    }

    result
}

/// A notice on its own, used when there is no complaint to show alongside it.
pub fn present_notice(notice: &Notice) -> CommandResultViewModel<NoticeViewModel> {
    let badge = match notice.level {
        NoticeLevel::Success => StatusBadge::success(notice.title.clone()),
        NoticeLevel::Error => StatusBadge::error(notice.title.clone()),
    };
    CommandResultViewModel::new(notice_view(notice)).with_badge(badge)
}
