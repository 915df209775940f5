pub mod common;
pub mod complaint;
pub mod config;
pub mod result;
pub mod stats;

use std::fmt;

pub use common::{Guidance, OutputFormat, StatusBadge, StatusLevel, ViewMode};
pub use complaint::{
    ComplaintDetailViewModel, ComplaintEntry, ComplaintListViewModel, FilterSummary, NoticeViewModel,
    PhotoSummary,
};
pub use config::ConfigViewModel;
pub use result::CommandResultViewModel;
pub use stats::{CountEntry, StatsViewModel};

/// Bridge from a view model to its text view.
pub trait CreateView {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a>;
}
