use tt_core::TimeEntry;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntryDto {
    pub id: Uuid,
    pub task_id: Option<Uuid>,
    pub project_id: Option<Uuid>,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub duration: Option<i64>,
    pub description: Option<String>,
}

impl From<TimeEntry> for TimeEntryDto {
    fn from(te: TimeEntry) -> Self {
        Self {
            id: te.id,
            task_id: te.task_id,
            project_id: te.project_id,
            start_time: te.start_time,
            end_time: te.end_time,
            duration: te.duration,
            description: te.description,
        }
    }
}
