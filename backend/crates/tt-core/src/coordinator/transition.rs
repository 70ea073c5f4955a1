use crate::TimerOwner;

use serde::Serialize;
use uuid::Uuid;

/// A timer that an operation moved from tracking to idle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoppedTimer {
    pub owner: TimerOwner,
    pub elapsed_seconds: i64,
    /// Ledger entry closed for this interval
    pub entry_id: Uuid,
}

/// Result of a coordinator operation: the entity as committed plus every
/// timer the operation started or stopped along the way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transition<T> {
    pub entity: T,
    pub started: Option<TimerOwner>,
    pub stopped: Vec<StoppedTimer>,
}

impl<T> Transition<T> {
    pub fn into_entity(self) -> T {
        self.entity
    }

    /// Stops performed on timers other than `owner`
    pub fn cascade_for(&self, owner: TimerOwner) -> impl Iterator<Item = &StoppedTimer> {
        self.stopped.iter().filter(move |s| s.owner != owner)
    }
}
