// Views turn view models into text; each implements `fmt::Display` for a `ViewMode`.

pub mod complaint;
pub mod config;
pub mod stats;

pub use complaint::{ComplaintDetailView, ComplaintListView};
pub use config::ConfigView;
pub use stats::StatsView;
