use crate::TimerOwner;
use crate::clock::elapsed_seconds;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One tracked interval in the ledger.
///
/// A task entry has `task_id` set and carries the task's project, if any. A
/// project entry has `task_id` unset. The entry is open while `end_time` is
/// `None`; closing it fills `end_time` and `duration` together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntry {
    pub id: Uuid,
    pub account_id: Uuid,
    pub task_id: Option<Uuid>,
    pub project_id: Option<Uuid>,

    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    /// Seconds, set only on close
    pub duration: Option<i64>,

    pub description: Option<String>,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TimeEntry {
    /// Open an entry for a task timer starting at `now`
    pub fn open_for_task(
        account_id: Uuid,
        task_id: Uuid,
        project_id: Option<Uuid>,
        now: DateTime<Utc>,
    ) -> Self {
        Self::open(account_id, Some(task_id), project_id, now)
    }

    /// Open an entry for a project's own timer starting at `now`
    pub fn open_for_project(account_id: Uuid, project_id: Uuid, now: DateTime<Utc>) -> Self {
        Self::open(account_id, None, Some(project_id), now)
    }

    fn open(
        account_id: Uuid,
        task_id: Option<Uuid>,
        project_id: Option<Uuid>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            account_id,
            task_id,
            project_id,
            start_time: now,
            end_time: None,
            duration: None,
            description: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// The task when `task_id` is set, otherwise the project.
    pub fn owner(&self) -> Option<TimerOwner> {
        match (self.task_id, self.project_id) {
            (Some(task_id), _) => Some(TimerOwner::Task(task_id)),
            (None, Some(project_id)) => Some(TimerOwner::Project(project_id)),
            (None, None) => None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.end_time.is_none()
    }

    /// Close the interval at `now`. Returns the recorded duration.
    pub fn close(&mut self, now: DateTime<Utc>, description: Option<String>) -> i64 {
        let duration = elapsed_seconds(self.start_time, now);
        self.end_time = Some(now);
        self.duration = Some(duration);
        if description.is_some() {
            self.description = description;
        }
        self.updated_at = now;
        duration
    }
}
