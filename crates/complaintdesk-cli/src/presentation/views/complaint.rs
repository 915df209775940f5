use std::fmt;

use crate::presentation::formatters::{humanize_bytes, single_line};
use crate::presentation::view_models::{
    ComplaintDetailViewModel, ComplaintEntry, ComplaintListViewModel, CreateView,
    NoticeViewModel, ViewMode,
};
use complaintdesk_types::truncate_chars;

const TITLE_WIDTH: usize = 48;
const PREVIEW_WIDTH: usize = 72;

impl CreateView for ComplaintListViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(ComplaintListView::new(self, mode))
    }
}

impl CreateView for ComplaintDetailViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(ComplaintDetailView::new(self, mode))
    }
}

impl CreateView for NoticeViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(NoticeView { data: self })
    }
}

// --------------------------------------------------------
// Complaint List View
// --------------------------------------------------------

pub struct ComplaintListView<'a> {
    data: &'a ComplaintListViewModel,
    mode: ViewMode,
}

impl<'a> ComplaintListView<'a> {
    pub fn new(data: &'a ComplaintListViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }

    fn render_minimal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for complaint in &self.data.complaints {
            writeln!(f, "{}", complaint.id)?;
        }
        Ok(())
    }

    fn render_compact(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for complaint in &self.data.complaints {
            writeln!(
                f,
                "#{:<5} {:<12} {}",
                complaint.id,
                complaint.status_label,
                truncate_chars(&single_line(&complaint.title), TITLE_WIDTH)
            )?;
        }
        Ok(())
    }

    fn render_standard(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.complaints.is_empty() {
            writeln!(f, "No complaints to show.")?;
            return Ok(());
        }

        writeln!(
            f,
            "{:<6} {:<10} {:<12} {:<13} TITLE",
            "ID", "DATE", "STATUS", "TYPE"
        )?;
        writeln!(f, "{}", "-".repeat(80))?;

        for complaint in &self.data.complaints {
            let marker = if complaint.response.is_some() { " [answered]" } else { "" };
            writeln!(
                f,
                "{:<6} {:<10} {:<12} {:<13} {}{}",
                complaint.id,
                complaint.date,
                complaint.status_label,
                complaint.kind_label,
                truncate_chars(&single_line(&complaint.title), TITLE_WIDTH),
                marker
            )?;
            writeln!(
                f,
                "{:<6} {}",
                "",
                truncate_chars(&single_line(&complaint.description), PREVIEW_WIDTH)
            )?;
        }

        Ok(())
    }

    fn render_verbose(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.complaints.is_empty() {
            writeln!(f, "No complaints to show.")?;
            return Ok(());
        }

        for (i, complaint) in self.data.complaints.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write_entry(f, complaint)?;
        }

        writeln!(f)?;
        writeln!(
            f,
            "Filter: status={} type={} search={}",
            self.data.filter.status,
            self.data.filter.kind,
            self.data.filter.search.as_deref().unwrap_or("-")
        )?;
        Ok(())
    }
}

impl<'a> fmt::Display for ComplaintListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Minimal => self.render_minimal(f),
            ViewMode::Compact => self.render_compact(f),
            ViewMode::Standard => self.render_standard(f),
            ViewMode::Verbose => self.render_verbose(f),
        }
    }
}

/// Full block for one complaint. The response block appears only when a response exists.
fn write_entry(f: &mut fmt::Formatter, complaint: &ComplaintEntry) -> fmt::Result {
    writeln!(f, "#{}  {}", complaint.id, complaint.title)?;
    writeln!(
        f,
        "Status: {}   Type: {}   Date: {}",
        complaint.status_label, complaint.kind_label, complaint.date
    )?;
    writeln!(f)?;
    for line in complaint.description.lines() {
        writeln!(f, "  {}", line)?;
    }

    if let Some(response) = &complaint.response {
        writeln!(f)?;
        writeln!(f, "Response:")?;
        for line in response.lines() {
            writeln!(f, "  {}", line)?;
        }
    }
    Ok(())
}

// --------------------------------------------------------
// Complaint Detail View
// --------------------------------------------------------

pub struct ComplaintDetailView<'a> {
    data: &'a ComplaintDetailViewModel,
    mode: ViewMode,
}

impl<'a> ComplaintDetailView<'a> {
    pub fn new(data: &'a ComplaintDetailViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }
}

impl<'a> fmt::Display for ComplaintDetailView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.mode == ViewMode::Minimal {
            return writeln!(f, "{}", self.data.complaint.id);
        }

        if let Some(notice) = &self.data.notice {
            writeln!(f, "{}", notice.description)?;
            writeln!(f)?;
        }

        write_entry(f, &self.data.complaint)?;

        if let Some(photo) = &self.data.photo {
            writeln!(f)?;
            writeln!(
                f,
                "Photo: {} ({})",
                photo.mime_type.as_deref().unwrap_or("unknown type"),
                humanize_bytes(photo.size_bytes)
            )?;
        }
        Ok(())
    }
}

struct NoticeView<'a> {
    data: &'a NoticeViewModel,
}

impl<'a> fmt::Display for NoticeView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.data.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::{present_complaint_detail, present_complaint_list};
    use complaintdesk_engine::ComplaintFilter;
    use complaintdesk_testing::fixtures::{self, complaint};

    #[test]
    fn test_minimal_list_prints_ids_only() {
        let complaints = fixtures::sample_complaints();
        let visible: Vec<_> = complaints.iter().collect();
        let result = present_complaint_list(&visible, 2, &ComplaintFilter::new());

        let text = result.content.create_view(ViewMode::Minimal).to_string();

        assert_eq!(text, "1\n2\n");
    }

    #[test]
    fn test_standard_list_uses_labels() {
        let complaints = fixtures::sample_complaints();
        let visible: Vec<_> = complaints.iter().collect();
        let result = present_complaint_list(&visible, 2, &ComplaintFilter::new());

        let text = result.content.create_view(ViewMode::Standard).to_string();

        assert!(text.contains("Needs review"));
        assert!(text.contains("From guard"));
        assert!(text.contains("Нарушение пропускного режима"));
    }

    #[test]
    fn test_detail_shows_response_block_only_when_present() {
        let open = complaint(1).build();
        let answered = complaint(2).response("Visitor was escorted out").build();

        let open_text = present_complaint_detail(&open, None)
            .content
            .create_view(ViewMode::Standard)
            .to_string();
        let answered_text = present_complaint_detail(&answered, None)
            .content
            .create_view(ViewMode::Standard)
            .to_string();

        assert!(!open_text.contains("Response:"));
        assert!(answered_text.contains("Response:\n  Visitor was escorted out"));
    }
}
