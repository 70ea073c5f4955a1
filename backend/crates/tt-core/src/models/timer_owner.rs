use crate::OwnerKind;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The task or project a timer (and its ledger entries) belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum TimerOwner {
    Task(Uuid),
    Project(Uuid),
}

impl TimerOwner {
    pub fn kind(&self) -> OwnerKind {
        match self {
            Self::Task(_) => OwnerKind::Task,
            Self::Project(_) => OwnerKind::Project,
        }
    }

    pub fn id(&self) -> Uuid {
        match self {
            Self::Task(id) | Self::Project(id) => *id,
        }
    }
}

impl std::fmt::Display for TimerOwner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.kind(), self.id())
    }
}
