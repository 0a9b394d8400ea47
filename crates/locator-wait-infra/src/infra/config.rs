//! Wait configuration.

use std::env;
use std::time::Duration;

use tracing::warn;

use crate::domain::DEFAULT_POLL_INTERVAL;
use crate::domain::DEFAULT_TIMEOUT;
use crate::domain::WaitSettings;

const TIMEOUT_ENV: &str = "LOCATOR_WAIT_TIMEOUT_MS";
const POLL_INTERVAL_ENV: &str = "LOCATOR_WAIT_POLL_MS";

#[derive(Debug, Clone)]
pub struct WaitConfig {
    timeout: Duration,
    poll_interval: Duration,
}

impl Default for WaitConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

impl WaitConfig {
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    pub fn settings(&self) -> WaitSettings {
        WaitSettings::try_new(self.timeout, self.poll_interval).unwrap_or_else(|err| {
            warn!(error = %err, "Invalid wait settings; using defaults");
            WaitSettings::default()
        })
    }

    pub fn from_env() -> Self {
        let timeout = Duration::from_millis(parse_env_u64(
            TIMEOUT_ENV,
            DEFAULT_TIMEOUT.as_millis() as u64,
        ));
        let poll_interval = match parse_env_u64(
            POLL_INTERVAL_ENV,
            DEFAULT_POLL_INTERVAL.as_millis() as u64,
        ) {
            0 => {
                warn!(key = POLL_INTERVAL_ENV, "Poll interval must be non-zero; using default");
                DEFAULT_POLL_INTERVAL
            }
            ms => Duration::from_millis(ms),
        };
        Self {
            timeout,
            poll_interval,
        }
    }
}

fn parse_env_u64(key: &str, default: u64) -> u64 {
    let value = match env::var(key) {
        Ok(value) => value,
        Err(_) => return default,
    };
    if value.trim().is_empty() {
        return default;
    }
    match value.trim().parse::<u64>() {
        Ok(parsed) => parsed,
        Err(_) => {
            warn!(value = %value, key, "Invalid numeric config; using default");
            default
        }
    }
}
