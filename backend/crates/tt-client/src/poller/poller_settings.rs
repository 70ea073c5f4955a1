use tt_config::PollerConfig;

use std::time::Duration;

/// Shortest refresh or tick period the loop will run with
pub const MIN_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Timing knobs for the reconciliation loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollerSettings {
    /// Canonical re-fetch period
    pub refresh_interval: Duration,
    /// Cosmetic display tick while tracking
    pub tick_interval: Duration,
    /// Delay before re-fetching after a failed start/stop
    pub recovery_delay: Duration,
}

impl PollerSettings {
    /// Raise a zero or too-short refresh/tick period to `MIN_POLL_INTERVAL`
    pub fn clamped(self) -> Self {
        Self {
            refresh_interval: self.refresh_interval.max(MIN_POLL_INTERVAL),
            tick_interval: self.tick_interval.max(MIN_POLL_INTERVAL),
            recovery_delay: self.recovery_delay,
        }
    }
}

impl Default for PollerSettings {
    fn default() -> Self {
        Self::from(&PollerConfig::default())
    }
}

impl From<&PollerConfig> for PollerSettings {
    fn from(config: &PollerConfig) -> Self {
        Self {
            refresh_interval: config.refresh_interval(),
            tick_interval: config.tick_interval(),
            recovery_delay: config.recovery_delay(),
        }
    }
}
