// Subcommands map one-to-one to the desk's views: the submission form,
// the filtered list, the detail/response view and the statistics panel.

mod commands;
mod common;
pub mod hints;

pub use commands::*;
pub use common::*;

pub use crate::types::{LogLevel, OutputFormat};

use clap::Parser;

#[derive(Parser)]
#[command(name = "complaintdesk")]
#[command(about = "Submit, review and answer complaints about security staff", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Store endpoint URL (overrides COMPLAINTDESK_ENDPOINT and the config file)
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Config file path (overrides COMPLAINTDESK_CONFIG)
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}
