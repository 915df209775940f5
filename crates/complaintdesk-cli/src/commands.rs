use super::args::{Cli, Commands, OutputFormat, ViewModeArgs};
use super::handlers::{self, HandlerContext};
use crate::presentation::presenters;
use anyhow::Result;
use complaintdesk_runtime::{Error as RuntimeError, Notice, resolve_config_path};

pub fn run(cli: Cli) -> Result<()> {
    let config_path = resolve_config_path(cli.config.as_deref())?;
    let view_mode = match &cli.command {
        Commands::List { view_mode, .. } => view_mode.clone(),
        _ => ViewModeArgs::default(),
    };
    let ctx = HandlerContext::new(cli.format, config_path, cli.endpoint)
        .with_view_mode(&view_mode);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let result = runtime.block_on(async {
        match cli.command {
            Commands::Submit {
                title,
                description,
                kind,
                photo,
            } => handlers::submit::handle(&ctx, title, description, kind, photo.as_deref()).await,

            Commands::List {
                status,
                kind,
                search,
                view_mode: _,
            } => handlers::list::handle(&ctx, status, kind, search).await,

            Commands::Show { id } => handlers::show::handle(&ctx, &id).await,

            Commands::Status { id, status } => handlers::status::handle(&ctx, &id, status).await,

            Commands::Respond { id, text } => handlers::respond::handle(&ctx, &id, text).await,

            Commands::Stats => handlers::stats::handle(&ctx).await,

            Commands::Config { command } => handlers::config::handle(&ctx, command),
        }
    });

    if let Err(err) = &result {
        report_failure(&ctx, err);
    }
    result
}

/// JSON consumers get the failure as a structured notice on stdout;
/// the message still goes to stderr from `main`.
fn report_failure(ctx: &HandlerContext, err: &anyhow::Error) {
    if ctx.format != OutputFormat::Json {
        return;
    }

    let notice = match err.downcast_ref::<RuntimeError>() {
        Some(runtime_err) => Notice::from(runtime_err),
        None => Notice::error("Command failed", err.to_string()),
    };
    if let Err(render_err) = ctx.render(presenters::present_notice(&notice)) {
        tracing::warn!(error = %render_err, "failed to render error notice");
    }
}
