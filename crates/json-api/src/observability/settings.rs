//! Request monitoring settings, fixed once at startup.

use std::{sync::OnceLock, time::Duration};

use tracing::warn;

use crate::config::observability::ObservabilityConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct RequestSettings {
    pub(super) slow_request_threshold: Duration,
    pub(super) propagate_parent: bool,
}

impl Default for RequestSettings {
    fn default() -> Self {
        Self {
            slow_request_threshold: Duration::from_secs(1),
            propagate_parent: false,
        }
    }
}

impl From<&ObservabilityConfig> for RequestSettings {
    fn from(config: &ObservabilityConfig) -> Self {
        Self {
            slow_request_threshold: config.slow_request_threshold(),
            propagate_parent: config.propagates_parent(),
        }
    }
}

static SETTINGS: OnceLock<RequestSettings> = OnceLock::new();

pub(super) fn install(settings: RequestSettings) {
    if SETTINGS.set(settings).is_err() {
        warn!("request settings were already installed; keeping the first");
    }
}

/// Installed settings, or defaults when running without [`install`] (tests).
pub(super) fn current() -> RequestSettings {
    SETTINGS.get().copied().unwrap_or_default()
}
