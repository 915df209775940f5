use super::HandlerContext;
use crate::presentation::presenters;
use anyhow::Result;
use complaintdesk_engine::{ComplaintDraft, ValidationError, check_photo_size};
use complaintdesk_runtime::Error as RuntimeError;
use complaintdesk_types::{ComplaintKind, mime_from_extension};
use std::path::Path;

pub async fn handle(
    ctx: &HandlerContext,
    title: String,
    description: String,
    kind: ComplaintKind,
    photo: Option<&Path>,
) -> Result<()> {
    let mut draft = ComplaintDraft::new()
        .title(title)
        .description(description)
        .kind(kind);

    // Oversized photos are rejected before the file is read or anything is sent.
    if let Some(path) = photo {
        let (bytes, mime_type) = read_photo(path)?;
        draft
            .attach_photo(&bytes, mime_type)
            .map_err(RuntimeError::from)?;
    }

    let mut desk = ctx.open_desk().await?;
    *desk.draft_mut() = draft;
    let notice = desk.submit().await?;

    let created = notice
        .subject
        .as_ref()
        .and_then(|id| desk.find(&id.to_string()));

    match created {
        Some(complaint) => ctx.render(presenters::present_complaint_detail(
            complaint,
            Some(&notice),
        )),
        None => ctx.render(presenters::present_notice(&notice)),
    }
}

fn read_photo(path: &Path) -> complaintdesk_runtime::Result<(Vec<u8>, &'static str)> {
    let mime_type = path
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(mime_from_extension)
        .ok_or_else(|| ValidationError::UnsupportedPhotoType(path.display().to_string()))?;

    let size = std::fs::metadata(path)?.len();
    check_photo_size(usize::try_from(size).unwrap_or(usize::MAX))?;

    let bytes = std::fs::read(path)?;
    Ok((bytes, mime_type))
}
