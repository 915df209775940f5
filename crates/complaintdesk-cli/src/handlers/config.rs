use super::HandlerContext;
use crate::args::ConfigCommand;
use crate::presentation::presenters;
use anyhow::{Result, bail};
use complaintdesk_client::{HttpComplaintStore, StoreConfig};
use tracing::info;

pub fn handle(ctx: &HandlerContext, command: ConfigCommand) -> Result<()> {
    match command {
        ConfigCommand::Show => show(ctx),
        ConfigCommand::SetEndpoint { url } => set_endpoint(ctx, url),
    }
}

fn show(ctx: &HandlerContext) -> Result<()> {
    let config = ctx.load_config()?;
    let effective = config.resolve_endpoint(ctx.endpoint_flag()).ok();

    ctx.render(presenters::present_config(
        ctx.config_path(),
        &config,
        effective,
    ))
}

fn set_endpoint(ctx: &HandlerContext, url: String) -> Result<()> {
    let url = url.trim().to_string();
    if url.is_empty() {
        bail!("Endpoint must not be empty");
    }
    // Same parsing the desk does on connect, so a bad URL is caught now.
    HttpComplaintStore::new(StoreConfig::new(url.clone()))?;

    let mut config = ctx.load_config()?;
    config.set_endpoint(url);
    config.save_to(ctx.config_path())?;
    info!(path = %ctx.config_path().display(), "endpoint saved");

    let effective = config.resolve_endpoint(ctx.endpoint_flag()).ok();
    ctx.render(presenters::present_endpoint_saved(
        ctx.config_path(),
        &config,
        effective,
    ))
}
