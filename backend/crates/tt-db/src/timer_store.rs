use crate::DbError;
use crate::repositories::project_repository::ProjectRepository;
use crate::repositories::task_repository::TaskRepository;
use crate::repositories::time_entry_repository::TimeEntryRepository;
use crate::repositories::timer_lock_repository::TimerLockRepository;

use tt_core::{
    Project, Result as CoreErrorResult, Task, TimeEntry, TimerOwner, TimerStore, TimerTransaction,
};

use async_trait::async_trait;
use sqlx::{Sqlite, SqlitePool, Transaction};
use uuid::Uuid;

/// `TimerStore` over a SQLite pool. Each unit of work is one database
/// transaction that opens with a write to the account's lock row.
#[derive(Clone)]
pub struct SqliteTimerStore {
    pool: SqlitePool,
}

impl SqliteTimerStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Rolls back on drop unless committed.
pub struct SqliteTimerTransaction {
    tx: Transaction<'static, Sqlite>,
}

#[async_trait]
impl TimerStore for SqliteTimerStore {
    type Transaction = SqliteTimerTransaction;

    async fn begin(&self, account_id: Uuid) -> CoreErrorResult<SqliteTimerTransaction> {
        let mut tx = self.pool.begin().await.map_err(DbError::from)?;
        TimerLockRepository::acquire(&mut *tx, account_id).await?;
        Ok(SqliteTimerTransaction { tx })
    }
}

#[async_trait]
impl TimerTransaction for SqliteTimerTransaction {
    async fn find_task(
        &mut self,
        account_id: Uuid,
        task_id: Uuid,
    ) -> CoreErrorResult<Option<Task>> {
        Ok(TaskRepository::find_by_id(&mut *self.tx, account_id, task_id).await?)
    }

    async fn find_project(
        &mut self,
        account_id: Uuid,
        project_id: Uuid,
    ) -> CoreErrorResult<Option<Project>> {
        Ok(ProjectRepository::find_by_id(&mut *self.tx, account_id, project_id).await?)
    }

    async fn find_tracking_tasks(
        &mut self,
        account_id: Uuid,
        project_id: Uuid,
    ) -> CoreErrorResult<Vec<Task>> {
        Ok(TaskRepository::find_tracking_by_project(&mut *self.tx, account_id, project_id).await?)
    }

    async fn update_task_timer(&mut self, task: &Task) -> CoreErrorResult<()> {
        Ok(TaskRepository::update_timer(&mut *self.tx, task).await?)
    }

    async fn update_project_timer(&mut self, project: &Project) -> CoreErrorResult<()> {
        Ok(ProjectRepository::update_timer(&mut *self.tx, project).await?)
    }

    async fn update_task_project(&mut self, task: &Task) -> CoreErrorResult<()> {
        Ok(TaskRepository::update_project(&mut *self.tx, task).await?)
    }

    async fn create_time_entry(&mut self, entry: &TimeEntry) -> CoreErrorResult<()> {
        Ok(TimeEntryRepository::create(&mut *self.tx, entry).await?)
    }

    async fn find_open_time_entry(
        &mut self,
        account_id: Uuid,
        owner: TimerOwner,
    ) -> CoreErrorResult<Option<TimeEntry>> {
        Ok(TimeEntryRepository::find_open_for_owner(&mut *self.tx, account_id, owner).await?)
    }

    async fn update_time_entry(&mut self, entry: &TimeEntry) -> CoreErrorResult<()> {
        Ok(TimeEntryRepository::update(&mut *self.tx, entry).await?)
    }

    async fn commit(self) -> CoreErrorResult<()> {
        self.tx.commit().await.map_err(DbError::from)?;
        Ok(())
    }
}
