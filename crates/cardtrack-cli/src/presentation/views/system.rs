use std::fmt;

use crate::presentation::view_models::ConfigViewModel;

pub struct ConfigView<'a> {
    data: &'a ConfigViewModel,
}

impl<'a> ConfigView<'a> {
    pub fn new(data: &'a ConfigViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for ConfigView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{:<22} {}", "data_dir", self.data.data_dir.display())?;
        writeln!(f, "{:<22} {}", "backend_url", self.data.backend_url)?;
        writeln!(
            f,
            "{:<22} {}",
            "request_timeout_secs", self.data.request_timeout_secs
        )?;
        writeln!(
            f,
            "{:<22} {}",
            "host.poll_interval_ms", self.data.host_poll_interval_ms
        )?;
        writeln!(f, "{:<22} {}", "host.max_attempts", self.data.host_max_attempts)?;
        match &self.data.host_file {
            Some(path) => writeln!(f, "{:<22} {}", "host_file", path.display()),
            None => writeln!(f, "{:<22} (none)", "host_file"),
        }
    }
}
