use super::HandlerContext;
use crate::presentation::presenters;
use anyhow::Result;

pub async fn handle(ctx: &HandlerContext, id: &str) -> Result<()> {
    let mut desk = ctx.open_desk().await?;
    let complaint = desk.select(id)?;

    ctx.render(presenters::present_complaint_detail(complaint, None))
}
