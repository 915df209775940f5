use crate::args::hints::cmd;
use crate::args::{OutputFormat, ViewModeArgs};
use crate::presentation::view_models::{CommandResultViewModel, CreateView};
use crate::presentation::{ConsoleRenderer, ViewMode};
use anyhow::Result;
use complaintdesk_client::HttpComplaintStore;
use complaintdesk_runtime::{Config, Desk, ENDPOINT_ENV, Error as RuntimeError};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Context for handler execution with consistent presentation utilities
pub struct HandlerContext {
    pub format: OutputFormat,
    pub view_mode: ViewMode,
    config_path: PathBuf,
    endpoint: Option<String>,
}

impl HandlerContext {
    pub fn new(format: OutputFormat, config_path: PathBuf, endpoint: Option<String>) -> Self {
        Self {
            format,
            view_mode: ViewMode::default(),
            config_path,
            endpoint,
        }
    }

    pub fn with_view_mode(mut self, view_mode: &ViewModeArgs) -> Self {
        self.view_mode = view_mode.resolve();
        self
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Endpoint given with `--endpoint`, if any
    pub fn endpoint_flag(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    pub fn load_config(&self) -> Result<Config> {
        Ok(Config::load_from(&self.config_path)?)
    }

    /// Resolve the store endpoint and load the collection.
    pub async fn open_desk(&self) -> Result<Desk<HttpComplaintStore>> {
        let config = self.load_config()?;
        let endpoint = match config.resolve_endpoint(self.endpoint_flag()) {
            Ok(endpoint) => endpoint,
            Err(RuntimeError::Config(msg)) => anyhow::bail!(
                "{}: pass --endpoint, set {} or run `{}`",
                msg,
                ENDPOINT_ENV,
                cmd::CONFIG_SET_ENDPOINT
            ),
            Err(err) => return Err(err.into()),
        };

        tracing::debug!(%endpoint, "opening desk");
        Ok(Desk::connect(&endpoint).await?)
    }

    /// Render a view model using the configured format and view mode
    pub fn render<T>(&self, view_model: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        let renderer = ConsoleRenderer::new(self.format.into(), self.view_mode);
        renderer.render(view_model)
    }
}
