use crate::Result as DbErrorResult;
use crate::rows::{TimeEntryRow, opt_id, opt_millis};

use tt_core::{TimeEntry, TimerOwner};

use uuid::Uuid;

/// Ledger access. Entries are appended and closed, never deleted here.
pub struct TimeEntryRepository;

impl TimeEntryRepository {
    pub async fn create<'e, E>(executor: E, entry: &TimeEntry) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
                INSERT INTO tt_time_entries (
                    id, account_id, task_id, project_id,
                    start_time, end_time, duration, description,
                    created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
                "#,
        )
        .bind(entry.id.to_string())
        .bind(entry.account_id.to_string())
        .bind(opt_id(entry.task_id))
        .bind(opt_id(entry.project_id))
        .bind(entry.start_time.timestamp_millis())
        .bind(opt_millis(entry.end_time))
        .bind(entry.duration)
        .bind(&entry.description)
        .bind(entry.created_at.timestamp_millis())
        .bind(entry.updated_at.timestamp_millis())
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn find_by_id<'e, E>(
        executor: E,
        account_id: Uuid,
        id: Uuid,
    ) -> DbErrorResult<Option<TimeEntry>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row: Option<TimeEntryRow> = sqlx::query_as(
            r#"
                SELECT
                    id, account_id, task_id, project_id,
                    start_time, end_time, duration, description,
                    created_at, updated_at
                FROM tt_time_entries
                WHERE id = ? AND account_id = ?
                "#,
        )
        .bind(id.to_string())
        .bind(account_id.to_string())
        .fetch_optional(executor)
        .await?;

        row.map(TimeEntry::try_from).transpose()
    }

    /// The owner's entry with no end time. Project entries are the ones
    /// without a task.
    pub async fn find_open_for_owner<'e, E>(
        executor: E,
        account_id: Uuid,
        owner: TimerOwner,
    ) -> DbErrorResult<Option<TimeEntry>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = match owner {
            TimerOwner::Task(_) => {
                r#"
                SELECT
                    id, account_id, task_id, project_id,
                    start_time, end_time, duration, description,
                    created_at, updated_at
                FROM tt_time_entries
                WHERE task_id = ? AND account_id = ? AND end_time IS NULL
                "#
            }
            TimerOwner::Project(_) => {
                r#"
                SELECT
                    id, account_id, task_id, project_id,
                    start_time, end_time, duration, description,
                    created_at, updated_at
                FROM tt_time_entries
                WHERE project_id = ? AND account_id = ? AND task_id IS NULL
                    AND end_time IS NULL
                "#
            }
        };

        let row: Option<TimeEntryRow> = sqlx::query_as(sql)
            .bind(owner.id().to_string())
            .bind(account_id.to_string())
            .fetch_optional(executor)
            .await?;

        row.map(TimeEntry::try_from).transpose()
    }

    /// Entries of one task, newest first
    pub async fn find_by_task<'e, E>(
        executor: E,
        account_id: Uuid,
        task_id: Uuid,
    ) -> DbErrorResult<Vec<TimeEntry>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows: Vec<TimeEntryRow> = sqlx::query_as(
            r#"
                SELECT
                    id, account_id, task_id, project_id,
                    start_time, end_time, duration, description,
                    created_at, updated_at
                FROM tt_time_entries
                WHERE task_id = ? AND account_id = ?
                ORDER BY start_time DESC, created_at DESC
                "#,
        )
        .bind(task_id.to_string())
        .bind(account_id.to_string())
        .fetch_all(executor)
        .await?;

        rows.into_iter().map(TimeEntry::try_from).collect()
    }

    /// Entries recorded against a project, both its own and those of tasks
    /// that were in it at the time, newest first
    pub async fn find_by_project<'e, E>(
        executor: E,
        account_id: Uuid,
        project_id: Uuid,
    ) -> DbErrorResult<Vec<TimeEntry>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows: Vec<TimeEntryRow> = sqlx::query_as(
            r#"
                SELECT
                    id, account_id, task_id, project_id,
                    start_time, end_time, duration, description,
                    created_at, updated_at
                FROM tt_time_entries
                WHERE project_id = ? AND account_id = ?
                ORDER BY start_time DESC, created_at DESC
                "#,
        )
        .bind(project_id.to_string())
        .bind(account_id.to_string())
        .fetch_all(executor)
        .await?;

        rows.into_iter().map(TimeEntry::try_from).collect()
    }

    pub async fn update<'e, E>(executor: E, entry: &TimeEntry) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
                UPDATE tt_time_entries
                SET end_time = ?, duration = ?, description = ?, updated_at = ?
                WHERE id = ? AND account_id = ?
                "#,
        )
        .bind(opt_millis(entry.end_time))
        .bind(entry.duration)
        .bind(&entry.description)
        .bind(entry.updated_at.timestamp_millis())
        .bind(entry.id.to_string())
        .bind(entry.account_id.to_string())
        .execute(executor)
        .await?;

        Ok(())
    }
}
