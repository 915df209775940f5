use std::fmt;

use crate::presentation::view_models::{CreateView, StatsViewModel, ViewMode};

impl CreateView for StatsViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(StatsView { data: self, mode })
    }
}

pub struct StatsView<'a> {
    data: &'a StatsViewModel,
    mode: ViewMode,
}

impl<'a> fmt::Display for StatsView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.mode == ViewMode::Minimal {
            return writeln!(f, "{}", self.data.total);
        }

        writeln!(f, "{:<16} {}", "Total", self.data.total)?;
        writeln!(f)?;
        writeln!(f, "By status")?;
        for entry in &self.data.by_status {
            writeln!(f, "  {:<14} {}", entry.label, entry.count)?;
        }
        writeln!(f)?;
        writeln!(f, "By type")?;
        for entry in &self.data.by_kind {
            writeln!(f, "  {:<14} {}", entry.label, entry.count)?;
        }
        Ok(())
    }
}
