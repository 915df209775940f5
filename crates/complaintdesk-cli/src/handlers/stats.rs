use super::HandlerContext;
use crate::presentation::presenters;
use anyhow::Result;

pub async fn handle(ctx: &HandlerContext) -> Result<()> {
    let desk = ctx.open_desk().await?;
    ctx.render(presenters::present_stats(&desk.stats()))
}
