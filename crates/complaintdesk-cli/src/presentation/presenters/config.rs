use crate::args::hints::cmd;
use crate::presentation::view_models::{CommandResultViewModel, ConfigViewModel, StatusBadge};
use complaintdesk_runtime::Config;
use std::path::Path;

pub fn present_config(
    config_path: &Path,
    config: &Config,
    effective_endpoint: Option<String>,
) -> CommandResultViewModel<ConfigViewModel> {
    let missing = effective_endpoint.is_none();

    let content = ConfigViewModel {
        config_path: config_path.display().to_string(),
        config_exists: config_path.exists(),
        endpoint: config.endpoint.clone(),
        effective_endpoint,
    };

    let mut result = CommandResultViewModel::new(content);
    if missing {
        result = result
            .with_badge(StatusBadge::warning("No store endpoint configured"))
            .with_hint("Save the store endpoint", cmd::CONFIG_SET_ENDPOINT);
    }
    result
}

pub fn present_endpoint_saved(
    config_path: &Path,
    config: &Config,
    effective_endpoint: Option<String>,
) -> CommandResultViewModel<ConfigViewModel> {
    let overridden = effective_endpoint != config.endpoint;

    let content = ConfigViewModel {
        config_path: config_path.display().to_string(),
        config_exists: true,
        endpoint: config.endpoint.clone(),
        effective_endpoint,
    };

    let result = CommandResultViewModel::new(content)
        .with_badge(StatusBadge::success("Endpoint saved"));

    if overridden {
        return result.with_note(
            "--endpoint or COMPLAINTDESK_ENDPOINT still takes precedence over the saved value",
        );
    }
    result.with_hint("List complaints", cmd::LIST)
}
