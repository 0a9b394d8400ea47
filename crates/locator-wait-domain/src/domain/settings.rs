//! Per-call wait settings.

use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(4);
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("Poll interval must be greater than zero")]
    ZeroPollInterval,
}

/// Deadline and probe cadence for one wait.
///
/// `timeout` is a hard window per poll, not a retry budget: sequential one-of
/// lookups give every candidate its own window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitSettings {
    timeout: Duration,
    poll_interval: Duration,
}

impl WaitSettings {
    pub fn try_new(timeout: Duration, poll_interval: Duration) -> Result<Self, SettingsError> {
        if poll_interval.is_zero() {
            return Err(SettingsError::ZeroPollInterval);
        }
        Ok(Self {
            timeout,
            poll_interval,
        })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    /// A zero timeout is allowed and means "probe exactly once".
    pub fn with_timeout(self, timeout: Duration) -> Self {
        Self { timeout, ..self }
    }

    pub fn with_poll_interval(self, poll_interval: Duration) -> Result<Self, SettingsError> {
        Self::try_new(self.timeout, poll_interval)
    }
}

impl Default for WaitSettings {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}
