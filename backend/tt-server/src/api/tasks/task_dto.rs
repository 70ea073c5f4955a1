use tt_core::Task;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Task snapshot with the server's live view of its timer
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDto {
    pub id: Uuid,
    pub project_id: Option<Uuid>,
    pub title: String,
    pub is_tracking: bool,
    pub tracked_start_time: Option<DateTime<Utc>>,
    pub total_tracked_time: i64,
    pub elapsed_seconds: i64,
    pub server_time: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TaskDto {
    pub fn new(task: Task, now: DateTime<Utc>) -> Self {
        let timer = task.timer();
        Self {
            id: task.id,
            project_id: task.project_id,
            is_tracking: timer.is_tracking(),
            tracked_start_time: timer.tracked_start_time(),
            total_tracked_time: timer.total_tracked_time(),
            elapsed_seconds: timer.live_elapsed(now),
            server_time: now,
            created_at: task.created_at,
            updated_at: task.updated_at,
            title: task.title,
        }
    }
}
