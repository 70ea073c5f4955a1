use crate::Result as DbErrorResult;
use crate::rows::{TaskRow, opt_id, opt_millis};

use tt_core::Task;

use uuid::Uuid;

pub struct TaskRepository;

impl TaskRepository {
    pub async fn create<'e, E>(executor: E, task: &Task) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let timer = task.timer();

        sqlx::query(
            r#"
                INSERT INTO tt_tasks (
                    id, account_id, project_id, title,
                    is_tracking, tracked_start_time, total_tracked_time,
                    created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
                "#,
        )
        .bind(task.id.to_string())
        .bind(task.account_id.to_string())
        .bind(opt_id(task.project_id))
        .bind(&task.title)
        .bind(timer.is_tracking())
        .bind(opt_millis(timer.tracked_start_time()))
        .bind(timer.total_tracked_time())
        .bind(task.created_at.timestamp_millis())
        .bind(task.updated_at.timestamp_millis())
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn find_by_id<'e, E>(
        executor: E,
        account_id: Uuid,
        id: Uuid,
    ) -> DbErrorResult<Option<Task>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row: Option<TaskRow> = sqlx::query_as(
            r#"
                SELECT
                    id, account_id, project_id, title,
                    is_tracking, tracked_start_time, total_tracked_time,
                    created_at, updated_at
                FROM tt_tasks
                WHERE id = ? AND account_id = ?
                "#,
        )
        .bind(id.to_string())
        .bind(account_id.to_string())
        .fetch_optional(executor)
        .await?;

        row.map(Task::try_from).transpose()
    }

    pub async fn find_by_project<'e, E>(
        executor: E,
        account_id: Uuid,
        project_id: Uuid,
    ) -> DbErrorResult<Vec<Task>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows: Vec<TaskRow> = sqlx::query_as(
            r#"
                SELECT
                    id, account_id, project_id, title,
                    is_tracking, tracked_start_time, total_tracked_time,
                    created_at, updated_at
                FROM tt_tasks
                WHERE project_id = ? AND account_id = ?
                ORDER BY created_at ASC
                "#,
        )
        .bind(project_id.to_string())
        .bind(account_id.to_string())
        .fetch_all(executor)
        .await?;

        rows.into_iter().map(Task::try_from).collect()
    }

    /// Tasks of the project whose timer is running
    pub async fn find_tracking_by_project<'e, E>(
        executor: E,
        account_id: Uuid,
        project_id: Uuid,
    ) -> DbErrorResult<Vec<Task>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows: Vec<TaskRow> = sqlx::query_as(
            r#"
                SELECT
                    id, account_id, project_id, title,
                    is_tracking, tracked_start_time, total_tracked_time,
                    created_at, updated_at
                FROM tt_tasks
                WHERE project_id = ? AND account_id = ? AND is_tracking = 1
                ORDER BY tracked_start_time ASC
                "#,
        )
        .bind(project_id.to_string())
        .bind(account_id.to_string())
        .fetch_all(executor)
        .await?;

        rows.into_iter().map(Task::try_from).collect()
    }

    /// Persist the timer fields only
    pub async fn update_timer<'e, E>(executor: E, task: &Task) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let timer = task.timer();

        sqlx::query(
            r#"
                UPDATE tt_tasks
                SET is_tracking = ?, tracked_start_time = ?, total_tracked_time = ?,
                    updated_at = ?
                WHERE id = ? AND account_id = ?
                "#,
        )
        .bind(timer.is_tracking())
        .bind(opt_millis(timer.tracked_start_time()))
        .bind(timer.total_tracked_time())
        .bind(task.updated_at.timestamp_millis())
        .bind(task.id.to_string())
        .bind(task.account_id.to_string())
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn update_project<'e, E>(executor: E, task: &Task) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
                UPDATE tt_tasks
                SET project_id = ?, updated_at = ?
                WHERE id = ? AND account_id = ?
                "#,
        )
        .bind(opt_id(task.project_id))
        .bind(task.updated_at.timestamp_millis())
        .bind(task.id.to_string())
        .bind(task.account_id.to_string())
        .execute(executor)
        .await?;

        Ok(())
    }
}
