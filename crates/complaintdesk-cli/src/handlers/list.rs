use super::HandlerContext;
use crate::presentation::presenters;
use anyhow::Result;
use complaintdesk_engine::{ComplaintFilter, KindFilter, StatusFilter};

pub async fn handle(
    ctx: &HandlerContext,
    status: StatusFilter,
    kind: KindFilter,
    search: Option<String>,
) -> Result<()> {
    let mut desk = ctx.open_desk().await?;

    let mut filter = ComplaintFilter::new().status(status).kind(kind);
    if let Some(query) = search {
        filter = filter.search(query);
    }
    desk.set_filter(filter);

    let visible = desk.visible();
    let view_model =
        presenters::present_complaint_list(&visible, desk.complaints().len(), desk.filter());
    ctx.render(view_model)
}
