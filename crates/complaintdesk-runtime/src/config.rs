use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "COMPLAINTDESK_CONFIG";

/// Environment variable overriding the configured store endpoint
pub const ENDPOINT_ENV: &str = "COMPLAINTDESK_ENDPOINT";

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. COMPLAINTDESK_CONFIG environment variable (with tilde expansion)
/// 3. XDG config directory
/// 4. ~/.complaintdesk/config.toml (fallback for systems without XDG)
pub fn resolve_config_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("complaintdesk").join("config.toml"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".complaintdesk").join("config.toml"));
    }

    Err(Error::Config(
        "Could not determine config path: no HOME directory or XDG config directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Collection endpoint of the complaint store
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
}

impl Config {
    /// Load the config; a missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn set_endpoint(&mut self, endpoint: impl Into<String>) {
        self.endpoint = Some(endpoint.into());
    }

    /// Pick the store endpoint: explicit flag, then environment, then this config.
    pub fn resolve_endpoint(&self, explicit: Option<&str>) -> Result<String> {
        let from_env = std::env::var(ENDPOINT_ENV).ok();
        pick_endpoint(explicit, from_env.as_deref(), self.endpoint.as_deref())
    }
}

fn pick_endpoint(explicit: Option<&str>, env: Option<&str>, file: Option<&str>) -> Result<String> {
    [explicit, env, file]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|candidate| !candidate.is_empty())
        .map(str::to_string)
        .ok_or_else(|| Error::Config("no store endpoint configured".to_string()))
}
