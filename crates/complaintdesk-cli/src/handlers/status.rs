use super::HandlerContext;
use crate::presentation::presenters;
use anyhow::Result;
use complaintdesk_types::ComplaintStatus;

pub async fn handle(ctx: &HandlerContext, id: &str, status: ComplaintStatus) -> Result<()> {
    let mut desk = ctx.open_desk().await?;
    let notice = desk.change_status(id, status).await?;

    match desk.find(id) {
        Some(complaint) => ctx.render(presenters::present_complaint_detail(
            complaint,
            Some(&notice),
        )),
        None => ctx.render(presenters::present_notice(&notice)),
    }
}
