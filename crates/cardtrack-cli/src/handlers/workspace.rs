use anyhow::Result;
use cardtrack_core::{FileStore, SETTINGS_FILE, SettingsStore};
use cardtrack_runtime::{
    Config, FilePoller, HOST_FILE_VAR, HostSdk, MetricsClient, StaticHost, bootstrap,
};
use std::path::{Path, PathBuf};

/// Everything a command needs from the environment: the data directory,
/// the resolved configuration and, when asked for, the host context.
pub struct Workspace {
    data_dir: PathBuf,
    config: Config,
    host_file: Option<PathBuf>,
}

impl Workspace {
    pub fn open(
        data_dir: PathBuf,
        backend_url: Option<&str>,
        host_file: Option<PathBuf>,
    ) -> Result<Self> {
        let config = Config::resolve(&data_dir, backend_url)?;
        let host_file = host_file.or_else(|| {
            std::env::var_os(HOST_FILE_VAR)
                .filter(|value| !value.is_empty())
                .map(PathBuf::from)
        });

        Ok(Self {
            data_dir,
            config,
            host_file,
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn host_file(&self) -> Option<&Path> {
        self.host_file.as_deref()
    }

    pub fn settings(&self) -> Result<SettingsStore<FileStore>> {
        let backend = FileStore::open(self.data_dir.join(SETTINGS_FILE))?;
        Ok(SettingsStore::new(backend))
    }

    pub fn client(&self) -> Result<MetricsClient> {
        Ok(MetricsClient::from_config(&self.config)?)
    }

    /// The host context, if one is configured.
    ///
    /// A host file is polled with the configured policy and the command
    /// continues without a host when it never appears. Otherwise
    /// `CARDTRACK_HOST_CONTEXT` is read once.
    pub async fn host(&self) -> Result<Option<StaticHost>> {
        if let Some(path) = &self.host_file {
            let mut poller = FilePoller::new(path);
            let policy = self.config.host.poll_policy();
            let host = bootstrap(&mut poller, &policy, |availability| {
                availability.into_handle()
            })
            .await;
            return Ok(host);
        }

        Ok(StaticHost::from_env()?)
    }
}

/// Borrow an optional host as the trait object the context resolvers take.
pub fn as_sdk(host: &Option<StaticHost>) -> Option<&dyn HostSdk> {
    host.as_ref().map(|host| host as &dyn HostSdk)
}
