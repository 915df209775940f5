use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ConfigViewModel {
    pub config_path: String,
    pub config_exists: bool,
    /// Endpoint stored in the config file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    /// Endpoint commands would use after flag and environment overrides
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_endpoint: Option<String>,
}
