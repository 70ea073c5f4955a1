use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_RECOVERY_DELAY_MS, DEFAULT_REFRESH_INTERVAL_SECS,
    DEFAULT_TICK_INTERVAL_MS, MAX_RECOVERY_DELAY_MS, MAX_REFRESH_INTERVAL_SECS,
    MAX_TICK_INTERVAL_MS, MIN_RECOVERY_DELAY_MS, MIN_REFRESH_INTERVAL_SECS, MIN_TICK_INTERVAL_MS,
};

use std::time::Duration;

use serde::Deserialize;

/// Timings of the client-side reconciliation poller.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PollerConfig {
    /// Re-fetch canonical state this often
    pub refresh_interval_secs: u64,
    /// Recompute the displayed elapsed time this often while tracking
    pub tick_interval_ms: u64,
    /// Wait this long after a failed start/stop before re-fetching
    pub recovery_delay_ms: u64,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            refresh_interval_secs: DEFAULT_REFRESH_INTERVAL_SECS,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            recovery_delay_ms: DEFAULT_RECOVERY_DELAY_MS,
        }
    }
}

impl PollerConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(MIN_REFRESH_INTERVAL_SECS..=MAX_REFRESH_INTERVAL_SECS)
            .contains(&self.refresh_interval_secs)
        {
            return Err(ConfigError::poller(format!(
                "poller.refresh_interval_secs must be {}-{}, got {}",
                MIN_REFRESH_INTERVAL_SECS, MAX_REFRESH_INTERVAL_SECS, self.refresh_interval_secs
            )));
        }

        if !(MIN_TICK_INTERVAL_MS..=MAX_TICK_INTERVAL_MS).contains(&self.tick_interval_ms) {
            return Err(ConfigError::poller(format!(
                "poller.tick_interval_ms must be {}-{}, got {}",
                MIN_TICK_INTERVAL_MS, MAX_TICK_INTERVAL_MS, self.tick_interval_ms
            )));
        }

        if !(MIN_RECOVERY_DELAY_MS..=MAX_RECOVERY_DELAY_MS).contains(&self.recovery_delay_ms) {
            return Err(ConfigError::poller(format!(
                "poller.recovery_delay_ms must be {}-{}, got {}",
                MIN_RECOVERY_DELAY_MS, MAX_RECOVERY_DELAY_MS, self.recovery_delay_ms
            )));
        }

        Ok(())
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn recovery_delay(&self) -> Duration {
        Duration::from_millis(self.recovery_delay_ms)
    }
}
