use crate::host::PollPolicy;
use crate::{Error, Result};
use cardtrack_core::CONFIG_FILE;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Environment variables that override `backend_url`, highest priority first
pub const BACKEND_URL_VARS: [&str; 2] = ["CARDTRACK_BACKEND_URL", "BACKEND_URL"];

/// Keys accepted by [`Config::set_value`], as written in `config.toml`
pub const CONFIG_KEYS: [&str; 4] = [
    "backend_url",
    "request_timeout_secs",
    "host.poll_interval_ms",
    "host.max_attempts",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostConfig {
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval_ms(),
            max_attempts: default_max_attempts(),
        }
    }
}

impl HostConfig {
    pub fn poll_policy(&self) -> PollPolicy {
        PollPolicy {
            interval: Duration::from_millis(self.poll_interval_ms),
            max_attempts: self.max_attempts,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_backend_url")]
    pub backend_url: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default)]
    pub host: HostConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: default_backend_url(),
            request_timeout_secs: default_request_timeout_secs(),
            host: HostConfig::default(),
        }
    }
}

fn default_backend_url() -> String {
    DEFAULT_BACKEND_URL.to_string()
}

fn default_request_timeout_secs() -> u64 {
    15
}

fn default_poll_interval_ms() -> u64 {
    100
}

fn default_max_attempts() -> u32 {
    100
}

impl Config {
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

    pub fn get_value(&self, key: &str) -> Option<String> {
        match key {
            "backend_url" => Some(self.backend_url.clone()),
            "request_timeout_secs" => Some(self.request_timeout_secs.to_string()),
            "host.poll_interval_ms" => Some(self.host.poll_interval_ms.to_string()),
            "host.max_attempts" => Some(self.host.max_attempts.to_string()),
            _ => None,
        }
    }

    /// Update one field by its dotted `config.toml` key.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "backend_url" => {
                let url = value.trim();
                if url.is_empty() {
                    return Err(Error::Config("backend_url cannot be empty".to_string()));
                }
                self.backend_url = url.trim_end_matches('/').to_string();
            }
            "request_timeout_secs" => self.request_timeout_secs = parse_number(key, value)?,
            "host.poll_interval_ms" => self.host.poll_interval_ms = parse_number(key, value)?,
            "host.max_attempts" => self.host.max_attempts = parse_number(key, value)?,
            _ => {
                return Err(Error::Config(format!(
                    "unknown key '{}' (expected one of: {})",
                    key,
                    CONFIG_KEYS.join(", ")
                )));
            }
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Apply `CARDTRACK_BACKEND_URL` / `BACKEND_URL` from the process
    /// environment.
    pub fn apply_env(&mut self) {
        self.apply_env_from(|name| std::env::var(name).ok());
    }

    pub fn apply_env_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let from_env = BACKEND_URL_VARS
            .iter()
            .find_map(|name| lookup(name).filter(|value| !value.trim().is_empty()));
        if let Some(url) = from_env {
            self.backend_url = url;
        }
    }

    /// Resolve the effective configuration: flag, then environment, then
    /// the file in `data_dir`, then defaults.
    pub fn resolve(data_dir: &Path, backend_url_flag: Option<&str>) -> Result<Self> {
        let mut config = Self::load_from(&data_dir.join(CONFIG_FILE))?;
        config.apply_env();
        if let Some(url) = backend_url_flag {
            config.backend_url = url.to_string();
        }
        Ok(config)
    }
}

fn parse_number<T: FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| Error::Config(format!("{} must be a whole number, got '{}'", key, value)))
}
