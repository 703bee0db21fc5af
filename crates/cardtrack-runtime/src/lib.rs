pub mod client;
pub mod config;
pub mod error;
pub mod host;
pub mod load;
pub mod services;

pub use client::MetricsClient;
pub use config::{CONFIG_KEYS, Config, HostConfig};
pub use error::{ContextField, Error, FetchError, FetchResult, Result};
pub use host::{
    FilePoller, FrameLocation, HOST_CONTEXT_VAR, HOST_FILE_VAR, HostAvailability, HostContext,
    HostPoller, HostSdk, PollPolicy, StaticHost, bootstrap, resolve_board, resolve_card,
    wait_for_host,
};
pub use load::{LoadSequencer, LoadTicket, Region};
pub use services::{
    BadgeRequest, BadgeService, CardPanel, CardView, HistoryRegion, PanelContent, PanelService,
    SAVED_MESSAGE, SettingsForm, SettingsService, UserSettingsUpload,
};
