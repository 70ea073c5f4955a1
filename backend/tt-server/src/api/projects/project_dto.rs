use tt_core::Project;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDto {
    pub id: Uuid,
    pub name: String,
    pub is_tracking: bool,
    pub tracked_start_time: Option<DateTime<Utc>>,
    pub total_tracked_time: i64,
    pub elapsed_seconds: i64,
    pub server_time: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProjectDto {
    pub fn new(project: Project, now: DateTime<Utc>) -> Self {
        let timer = project.timer();
        Self {
            id: project.id,
            is_tracking: timer.is_tracking(),
            tracked_start_time: timer.tracked_start_time(),
            total_tracked_time: timer.total_tracked_time(),
            elapsed_seconds: timer.live_elapsed(now),
            server_time: now,
            created_at: project.created_at,
            updated_at: project.updated_at,
            name: project.name,
        }
    }
}
