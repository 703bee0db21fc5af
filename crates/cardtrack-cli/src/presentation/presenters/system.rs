use cardtrack_runtime::Config;
use std::path::{Path, PathBuf};

use crate::presentation::view_models::{
    CommandResultViewModel, ConfigViewModel, SettingValueViewModel, StatusBadge,
};

pub fn present_config(
    data_dir: &Path,
    config: &Config,
    host_file: Option<PathBuf>,
) -> CommandResultViewModel<ConfigViewModel> {
    let content = ConfigViewModel {
        data_dir: data_dir.to_path_buf(),
        backend_url: config.backend_url.clone(),
        request_timeout_secs: config.request_timeout_secs,
        host_poll_interval_ms: config.host.poll_interval_ms,
        host_max_attempts: config.host.max_attempts,
        host_file,
    };

    CommandResultViewModel::new(content)
}

pub fn present_config_value(
    path: &Path,
    key: String,
    value: Option<String>,
) -> CommandResultViewModel<SettingValueViewModel> {
    let content = SettingValueViewModel {
        scope: path.display().to_string(),
        key,
        value,
    };

    CommandResultViewModel::new(content)
        .with_badge(StatusBadge::success(format!("Saved to {}", path.display())))
}
