use crate::Result as DbErrorResult;

use chrono::Utc;
use uuid::Uuid;

/// Per-account rows written as the first statement of a timer transaction.
///
/// The write takes SQLite's write lock up front: a concurrent timer
/// transaction waits, up to the busy timeout, before it reads anything.
pub struct TimerLockRepository;

impl TimerLockRepository {
    pub async fn acquire<'e, E>(executor: E, account_id: Uuid) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
                INSERT INTO tt_timer_locks (account_id, acquired_at)
                VALUES (?, ?)
                ON CONFLICT(account_id) DO UPDATE SET acquired_at = excluded.acquired_at
                "#,
        )
        .bind(account_id.to_string())
        .bind(Utc::now().timestamp_millis())
        .execute(executor)
        .await?;

        Ok(())
    }
}
