use crate::Result as DbErrorResult;
use crate::rows::{ProjectRow, opt_millis};

use tt_core::Project;

use uuid::Uuid;

pub struct ProjectRepository;

impl ProjectRepository {
    pub async fn create<'e, E>(executor: E, project: &Project) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let timer = project.timer();

        sqlx::query(
            r#"
                INSERT INTO tt_projects (
                    id, account_id, name,
                    is_tracking, tracked_start_time, total_tracked_time,
                    created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
                "#,
        )
        .bind(project.id.to_string())
        .bind(project.account_id.to_string())
        .bind(&project.name)
        .bind(timer.is_tracking())
        .bind(opt_millis(timer.tracked_start_time()))
        .bind(timer.total_tracked_time())
        .bind(project.created_at.timestamp_millis())
        .bind(project.updated_at.timestamp_millis())
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn find_by_id<'e, E>(
        executor: E,
        account_id: Uuid,
        id: Uuid,
    ) -> DbErrorResult<Option<Project>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row: Option<ProjectRow> = sqlx::query_as(
            r#"
                SELECT
                    id, account_id, name,
                    is_tracking, tracked_start_time, total_tracked_time,
                    created_at, updated_at
                FROM tt_projects
                WHERE id = ? AND account_id = ?
                "#,
        )
        .bind(id.to_string())
        .bind(account_id.to_string())
        .fetch_optional(executor)
        .await?;

        row.map(Project::try_from).transpose()
    }

    pub async fn find_by_account<'e, E>(
        executor: E,
        account_id: Uuid,
    ) -> DbErrorResult<Vec<Project>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows: Vec<ProjectRow> = sqlx::query_as(
            r#"
                SELECT
                    id, account_id, name,
                    is_tracking, tracked_start_time, total_tracked_time,
                    created_at, updated_at
                FROM tt_projects
                WHERE account_id = ?
                ORDER BY name ASC
                "#,
        )
        .bind(account_id.to_string())
        .fetch_all(executor)
        .await?;

        rows.into_iter().map(Project::try_from).collect()
    }

    /// Persist the timer fields only
    pub async fn update_timer<'e, E>(executor: E, project: &Project) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let timer = project.timer();

        sqlx::query(
            r#"
                UPDATE tt_projects
                SET is_tracking = ?, tracked_start_time = ?, total_tracked_time = ?,
                    updated_at = ?
                WHERE id = ? AND account_id = ?
                "#,
        )
        .bind(timer.is_tracking())
        .bind(opt_millis(timer.tracked_start_time()))
        .bind(timer.total_tracked_time())
        .bind(project.updated_at.timestamp_millis())
        .bind(project.id.to_string())
        .bind(project.account_id.to_string())
        .execute(executor)
        .await?;

        Ok(())
    }
}
