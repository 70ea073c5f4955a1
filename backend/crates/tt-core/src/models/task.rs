use crate::{TimerOwner, TimerState};

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A unit of work that can be timed on its own. Tasks optionally belong to
/// a project, whose timer is mutually exclusive with theirs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: Uuid,
    pub account_id: Uuid,
    pub project_id: Option<Uuid>,
    pub title: String,
    #[serde(flatten)]
    timer: TimerState,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Create a new task with an idle timer
    pub fn new(account_id: Uuid, project_id: Option<Uuid>, title: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            account_id,
            project_id,
            title,
            timer: TimerState::default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Rebuild a task loaded from storage
    pub fn restore(
        id: Uuid,
        account_id: Uuid,
        project_id: Option<Uuid>,
        title: String,
        timer: TimerState,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            account_id,
            project_id,
            title,
            timer,
            created_at,
            updated_at,
        }
    }

    pub fn owner(&self) -> TimerOwner {
        TimerOwner::Task(self.id)
    }

    pub fn timer(&self) -> &TimerState {
        &self.timer
    }

    pub(crate) fn timer_mut(&mut self) -> &mut TimerState {
        &mut self.timer
    }
}
