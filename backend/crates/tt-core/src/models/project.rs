//! Project entity - container for tasks, with a timer of its own.

use crate::{TimerOwner, TimerState};

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,
    pub account_id: Uuid,
    pub name: String,
    #[serde(flatten)]
    timer: TimerState,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Create a new project with an idle timer
    pub fn new(account_id: Uuid, name: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            account_id,
            name,
            timer: TimerState::default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Rebuild a project loaded from storage
    pub fn restore(
        id: Uuid,
        account_id: Uuid,
        name: String,
        timer: TimerState,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            account_id,
            name,
            timer,
            created_at,
            updated_at,
        }
    }

    pub fn owner(&self) -> TimerOwner {
        TimerOwner::Project(self.id)
    }

    pub fn timer(&self) -> &TimerState {
        &self.timer
    }

    pub(crate) fn timer_mut(&mut self) -> &mut TimerState {
        &mut self.timer
    }
}
