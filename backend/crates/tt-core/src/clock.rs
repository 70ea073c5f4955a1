//! Time source and the elapsed-time arithmetic shared by server and client.
//!
//! Every tracked interval is measured in whole seconds, floored. A negative
//! interval (the caller's clock is behind the clock that stamped the start)
//! is clamped to zero and never stored.

use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Duration, SubsecRound, Utc};

/// Supplies wall-clock timestamps.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// OS wall clock that never hands out a timestamp earlier than one it
/// already returned, even if the system time is stepped backwards.
#[derive(Debug, Default)]
pub struct SystemClock {
    last_millis: AtomicI64,
}

impl SystemClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        let wall = to_stored_precision(Utc::now());
        let wall_millis = wall.timestamp_millis();
        let previous = self.last_millis.fetch_max(wall_millis, Ordering::AcqRel);

        if previous > wall_millis {
            DateTime::from_timestamp_millis(previous).unwrap_or(wall)
        } else {
            wall
        }
    }
}

/// Clock that only moves when told to. Used by tests and simulations.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        *now += by;
    }

    pub fn advance_secs(&self, secs: i64) {
        self.advance(Duration::seconds(secs));
    }

    pub fn set(&self, to: DateTime<Utc>) {
        let mut now = self.now.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        *now = to;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Truncate to the millisecond precision timestamps are persisted with.
pub fn to_stored_precision(at: DateTime<Utc>) -> DateTime<Utc> {
    at.trunc_subsecs(3)
}

/// Whole seconds between `start` and `now`, floored and clamped at zero.
pub fn elapsed_seconds(start: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - start).num_seconds().max(0)
}

/// Accumulated total plus the live delta of a running interval.
pub fn live_elapsed(
    total_tracked_time: i64,
    tracked_start_time: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> i64 {
    match tracked_start_time {
        Some(start) => total_tracked_time + elapsed_seconds(start, now),
        None => total_tracked_time,
    }
}

/// Render seconds as `HH:MM:SS`. Hours are not wrapped at 24.
pub fn format_hms(seconds: i64) -> String {
    let seconds = seconds.max(0);
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}
