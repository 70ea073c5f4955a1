//! Persistence seam for the coordinator.
//!
//! A `TimerStore` hands out transactions; everything the coordinator reads or
//! writes for one operation goes through a single `TimerTransaction`. Dropping
//! a transaction without calling `commit` must discard every write made
//! through it.

use crate::{Project, Result as CoreErrorResult, Task, TimeEntry, TimerOwner};

use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait TimerStore: Send + Sync {
    type Transaction: TimerTransaction;

    /// Open a unit of work for `account_id`. Implementations must serialize
    /// timer transactions of the same account.
    async fn begin(&self, account_id: Uuid) -> CoreErrorResult<Self::Transaction>;
}

#[async_trait]
pub trait TimerTransaction: Send {
    async fn find_task(&mut self, account_id: Uuid, task_id: Uuid) -> CoreErrorResult<Option<Task>>;

    async fn find_project(
        &mut self,
        account_id: Uuid,
        project_id: Uuid,
    ) -> CoreErrorResult<Option<Project>>;

    /// Tasks of `project_id` whose timer is currently running
    async fn find_tracking_tasks(
        &mut self,
        account_id: Uuid,
        project_id: Uuid,
    ) -> CoreErrorResult<Vec<Task>>;

    async fn update_task_timer(&mut self, task: &Task) -> CoreErrorResult<()>;

    async fn update_project_timer(&mut self, project: &Project) -> CoreErrorResult<()>;

    async fn update_task_project(&mut self, task: &Task) -> CoreErrorResult<()>;

    async fn create_time_entry(&mut self, entry: &TimeEntry) -> CoreErrorResult<()>;

    /// The entry of `owner` with no end time, if any
    async fn find_open_time_entry(
        &mut self,
        account_id: Uuid,
        owner: TimerOwner,
    ) -> CoreErrorResult<Option<TimeEntry>>;

    async fn update_time_entry(&mut self, entry: &TimeEntry) -> CoreErrorResult<()>;

    async fn commit(self) -> CoreErrorResult<()>;
}
