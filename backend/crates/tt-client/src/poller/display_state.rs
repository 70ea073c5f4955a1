use crate::TimerView;

use tt_core::format_hms;

use chrono::{DateTime, Utc};

/// What a timer display should show right now
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DisplayState {
    /// Last snapshot adopted from the server
    pub snapshot: Option<TimerView>,
    pub is_tracking: bool,
    pub elapsed_seconds: i64,
    /// Most recent failure; cleared by the next successful fetch
    pub last_error: Option<String>,
    /// Local time of the last successful adoption
    pub last_synced_at: Option<DateTime<Utc>>,
    /// Estimated server clock minus local clock, in milliseconds
    pub skew_millis: i64,
}

impl DisplayState {
    pub fn formatted_elapsed(&self) -> String {
        format_hms(self.elapsed_seconds)
    }

    pub fn is_loaded(&self) -> bool {
        self.snapshot.is_some()
    }
}
