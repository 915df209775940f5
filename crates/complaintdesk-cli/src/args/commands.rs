use super::common::ViewModeArgs;
use clap::Subcommand;
use complaintdesk_engine::{KindFilter, StatusFilter};
use complaintdesk_types::{ComplaintKind, ComplaintStatus};
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Submit a new complaint")]
    Submit {
        #[arg(long)]
        title: String,

        #[arg(long)]
        description: String,

        #[arg(
            long = "type",
            default_value = "against_guard",
            help = "Complaint type: against_guard or from_guard"
        )]
        kind: ComplaintKind,

        #[arg(long, help = "Image file to attach (5 MB max)")]
        photo: Option<PathBuf>,
    },

    #[command(about = "List complaints, newest first")]
    List {
        #[arg(
            long,
            default_value = "all",
            help = "Filter by status: all, pending, review, resolved"
        )]
        status: StatusFilter,

        #[arg(
            long = "type",
            default_value = "all",
            help = "Filter by type: all, against_guard, from_guard"
        )]
        kind: KindFilter,

        #[arg(long, help = "Case-insensitive text search in title and description")]
        search: Option<String>,

        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    #[command(about = "Show one complaint with its response")]
    Show {
        #[arg(help = "Complaint ID")]
        id: String,
    },

    #[command(about = "Change the status of a complaint")]
    Status {
        #[arg(help = "Complaint ID")]
        id: String,

        #[arg(help = "New status: pending, review, resolved")]
        status: ComplaintStatus,
    },

    #[command(about = "Answer a complaint and mark it resolved")]
    Respond {
        #[arg(help = "Complaint ID")]
        id: String,

        #[arg(help = "Response text")]
        text: String,
    },

    #[command(about = "Show counts by status and type")]
    Stats,

    #[command(about = "Inspect or change the configuration")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Show the config file location and the store endpoint")]
    Show,

    #[command(about = "Save the store endpoint to the config file")]
    SetEndpoint {
        #[arg(help = "Collection endpoint URL")]
        url: String,
    },
}
