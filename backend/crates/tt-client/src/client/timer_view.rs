use tt_core::live_elapsed;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Server snapshot of a task or project timer.
///
/// Tasks carry `title` and projects carry `name`; everything else is shared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerView {
    pub id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub is_tracking: bool,
    pub tracked_start_time: Option<DateTime<Utc>>,
    pub total_tracked_time: i64,
    #[serde(default)]
    pub elapsed_seconds: i64,
    pub server_time: DateTime<Utc>,
}

impl TimerView {
    pub fn label(&self) -> &str {
        self.title
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or_default()
    }

    /// Elapsed seconds as of `server_now`, derived from the canonical start
    /// time and total rather than from any client-side counter
    pub fn elapsed_at(&self, server_now: DateTime<Utc>) -> i64 {
        let start = if self.is_tracking {
            self.tracked_start_time
        } else {
            None
        };
        live_elapsed(self.total_tracked_time, start, server_now)
    }
}
