use std::fmt;

use crate::presentation::view_models::{ConfigViewModel, CreateView, ViewMode};

impl CreateView for ConfigViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(ConfigView { data: self })
    }
}

pub struct ConfigView<'a> {
    data: &'a ConfigViewModel,
}

impl<'a> fmt::Display for ConfigView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let exists = if self.data.config_exists { "" } else { " (not created yet)" };
        writeln!(f, "Config file: {}{}", self.data.config_path, exists)?;
        writeln!(
            f,
            "Endpoint:    {}",
            self.data.endpoint.as_deref().unwrap_or("-")
        )?;
        if self.data.effective_endpoint != self.data.endpoint {
            writeln!(
                f,
                "In use:      {}",
                self.data.effective_endpoint.as_deref().unwrap_or("-")
            )?;
        }
        Ok(())
    }
}
