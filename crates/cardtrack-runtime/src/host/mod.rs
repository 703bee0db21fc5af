// NOTE: Host bootstrap
//
// The host SDK may load after the frame's own code. The frame polls for it a
// bounded number of times, then initializes exactly once, with the SDK
// handle when one appeared and without it otherwise. Every frame feature has
// a path that works without the SDK (URL parameters, local settings), so a
// missing SDK degrades instead of failing.

mod context;
mod static_host;

pub use context::{FrameLocation, resolve_board, resolve_card};
pub use static_host::{
    FilePoller, HOST_CONTEXT_VAR, HOST_FILE_VAR, HostContext, StaticHost,
};

use std::time::Duration;

/// The host capabilities the frame reads.
pub trait HostSdk {
    fn context(&self) -> HostContext;
}

/// One availability check for the host SDK.
pub trait HostPoller {
    type Handle;

    fn poll(&mut self) -> Option<Self::Handle>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    pub interval: Duration,
    /// Total polls, including the first. Zero behaves like one.
    pub max_attempts: u32,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(100),
            max_attempts: 100,
        }
    }
}

impl PollPolicy {
    pub fn single() -> Self {
        Self {
            interval: Duration::ZERO,
            max_attempts: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostAvailability<H> {
    Ready { handle: H, attempts: u32 },
    Unavailable { attempts: u32 },
}

impl<H> HostAvailability<H> {
    pub fn attempts(&self) -> u32 {
        match self {
            HostAvailability::Ready { attempts, .. }
            | HostAvailability::Unavailable { attempts } => *attempts,
        }
    }

    pub fn into_handle(self) -> Option<H> {
        match self {
            HostAvailability::Ready { handle, .. } => Some(handle),
            HostAvailability::Unavailable { .. } => None,
        }
    }
}

/// Poll until the host answers or the attempts run out, sleeping
/// `policy.interval` between polls.
pub async fn wait_for_host<P: HostPoller>(
    poller: &mut P,
    policy: &PollPolicy,
) -> HostAvailability<P::Handle> {
    let max_attempts = policy.max_attempts.max(1);
    let mut attempts = 0;

    loop {
        attempts += 1;
        if let Some(handle) = poller.poll() {
            return HostAvailability::Ready { handle, attempts };
        }
        if attempts >= max_attempts {
            return HostAvailability::Unavailable { attempts };
        }
        tokio::time::sleep(policy.interval).await;
    }
}

/// Wait for the host, then run `init` once with the outcome.
pub async fn bootstrap<P, F, T>(poller: &mut P, policy: &PollPolicy, init: F) -> T
where
    P: HostPoller,
    F: FnOnce(HostAvailability<P::Handle>) -> T,
{
    let availability = wait_for_host(poller, policy).await;
    match &availability {
        HostAvailability::Ready { attempts, .. } => {
            tracing::info!(attempts, "host SDK ready");
        }
        HostAvailability::Unavailable { attempts } => {
            tracing::warn!(attempts, "host SDK not found, initializing without it");
        }
    }
    init(availability)
}
