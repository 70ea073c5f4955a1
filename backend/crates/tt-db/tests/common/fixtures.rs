#![allow(dead_code)]

use tt_core::{Project, Task, TimeEntry};
use tt_db::{ProjectRepository, TaskRepository, TimeEntryRepository};

use chrono::{DateTime, TimeZone, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap()
}

/// Inserts an idle project
pub async fn create_test_project(pool: &SqlitePool, account_id: Uuid) -> Project {
    let project = Project::new(account_id, "Website relaunch".to_string());
    ProjectRepository::create(pool, &project)
        .await
        .expect("Failed to create test project");
    project
}

/// Inserts an idle task, optionally inside a project
pub async fn create_test_task(
    pool: &SqlitePool,
    account_id: Uuid,
    project_id: Option<Uuid>,
) -> Task {
    let task = Task::new(account_id, project_id, "Draft copy".to_string());
    TaskRepository::create(pool, &task)
        .await
        .expect("Failed to create test task");
    task
}

/// Inserts a closed task entry of `secs` seconds starting at `start`
pub async fn create_closed_task_entry(
    pool: &SqlitePool,
    task: &Task,
    start: DateTime<Utc>,
    secs: i64,
) -> TimeEntry {
    let mut entry = TimeEntry::open_for_task(task.account_id, task.id, task.project_id, start);
    entry.close(start + chrono::Duration::seconds(secs), None);
    TimeEntryRepository::create(pool, &entry)
        .await
        .expect("Failed to create time entry");
    entry
}
