use super::{HostPoller, HostSdk};
use crate::{Error, Result};
use cardtrack_types::{BoardId, CardId, ListId, Viewer};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Inline host context as JSON
pub const HOST_CONTEXT_VAR: &str = "CARDTRACK_HOST_CONTEXT";

/// Path of a host context file written by an embedding process
pub const HOST_FILE_VAR: &str = "CARDTRACK_HOST_FILE";

/// What the host knows about the frame.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostContext {
    #[serde(default)]
    pub board: Option<BoardId>,
    #[serde(default)]
    pub card: Option<CardId>,
    #[serde(default)]
    pub list: Option<ListId>,
    #[serde(default)]
    pub member: Option<Viewer>,
}

/// A host whose context is fixed when it is created.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticHost {
    context: HostContext,
}

impl StaticHost {
    pub fn new(context: HostContext) -> Self {
        Self { context }
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let context = serde_json::from_str(raw)
            .map_err(|e| Error::Config(format!("invalid host context: {}", e)))?;
        Ok(Self { context })
    }

    /// The host described by `CARDTRACK_HOST_CONTEXT`, if set.
    pub fn from_env() -> Result<Option<Self>> {
        match std::env::var(HOST_CONTEXT_VAR) {
            Ok(raw) if !raw.trim().is_empty() => Self::from_json(&raw).map(Some),
            _ => Ok(None),
        }
    }
}

impl HostSdk for StaticHost {
    fn context(&self) -> HostContext {
        self.context.clone()
    }
}

/// Polls for a host context file. The file counts as present once it
/// exists and parses; a half-written file is retried on the next poll.
#[derive(Debug, Clone)]
pub struct FilePoller {
    path: PathBuf,
}

impl FilePoller {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HostPoller for FilePoller {
    type Handle = StaticHost;

    fn poll(&mut self) -> Option<StaticHost> {
        let raw = std::fs::read_to_string(&self.path).ok()?;
        match StaticHost::from_json(&raw) {
            Ok(host) => Some(host),
            Err(err) => {
                tracing::debug!(path = %self.path.display(), error = %err, "host file not ready");
                None
            }
        }
    }
}
