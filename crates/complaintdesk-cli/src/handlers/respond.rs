use super::HandlerContext;
use crate::presentation::presenters;
use anyhow::Result;

pub async fn handle(ctx: &HandlerContext, id: &str, text: String) -> Result<()> {
    let mut desk = ctx.open_desk().await?;

    desk.select(id)?;
    desk.set_response_text(text);
    let notice = desk.submit_response(id).await?;

    match desk.find(id) {
        Some(complaint) => ctx.render(presenters::present_complaint_detail(
            complaint,
            Some(&notice),
        )),
        None => ctx.render(presenters::present_notice(&notice)),
    }
}
