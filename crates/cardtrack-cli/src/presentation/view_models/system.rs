use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

use crate::presentation::views::ConfigView;

#[derive(Debug, Serialize)]
pub struct ConfigViewModel {
    pub data_dir: PathBuf,
    pub backend_url: String,
    pub request_timeout_secs: u64,
    pub host_poll_interval_ms: u64,
    pub host_max_attempts: u32,
    pub host_file: Option<PathBuf>,
}

impl fmt::Display for ConfigViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", ConfigView::new(self))
    }
}
