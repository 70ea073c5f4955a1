//! Raw row shapes and their conversion into domain types.
//!
//! Ids are stored as hyphenated text, instants as epoch milliseconds.

use crate::{DbError, Result as DbErrorResult};

use tt_core::{Project, Task, TimeEntry, TimerState};

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

pub(crate) const PROJECTS: &str = "tt_projects";
pub(crate) const TASKS: &str = "tt_tasks";
pub(crate) const TIME_ENTRIES: &str = "tt_time_entries";

#[derive(Debug, FromRow)]
pub(crate) struct ProjectRow {
    id: String,
    account_id: String,
    name: String,
    is_tracking: bool,
    tracked_start_time: Option<i64>,
    total_tracked_time: i64,
    created_at: i64,
    updated_at: i64,
}

impl TryFrom<ProjectRow> for Project {
    type Error = DbError;

    fn try_from(row: ProjectRow) -> DbErrorResult<Self> {
        let timer = timer_state(
            PROJECTS,
            row.is_tracking,
            row.tracked_start_time,
            row.total_tracked_time,
        )?;

        Ok(Project::restore(
            parse_uuid(PROJECTS, &row.id)?,
            parse_uuid(PROJECTS, &row.account_id)?,
            row.name,
            timer,
            from_millis(PROJECTS, row.created_at)?,
            from_millis(PROJECTS, row.updated_at)?,
        ))
    }
}

#[derive(Debug, FromRow)]
pub(crate) struct TaskRow {
    id: String,
    account_id: String,
    project_id: Option<String>,
    title: String,
    is_tracking: bool,
    tracked_start_time: Option<i64>,
    total_tracked_time: i64,
    created_at: i64,
    updated_at: i64,
}

impl TryFrom<TaskRow> for Task {
    type Error = DbError;

    fn try_from(row: TaskRow) -> DbErrorResult<Self> {
        let timer = timer_state(
            TASKS,
            row.is_tracking,
            row.tracked_start_time,
            row.total_tracked_time,
        )?;

        Ok(Task::restore(
            parse_uuid(TASKS, &row.id)?,
            parse_uuid(TASKS, &row.account_id)?,
            row.project_id
                .as_deref()
                .map(|id| parse_uuid(TASKS, id))
                .transpose()?,
            row.title,
            timer,
            from_millis(TASKS, row.created_at)?,
            from_millis(TASKS, row.updated_at)?,
        ))
    }
}

#[derive(Debug, FromRow)]
pub(crate) struct TimeEntryRow {
    id: String,
    account_id: String,
    task_id: Option<String>,
    project_id: Option<String>,
    start_time: i64,
    end_time: Option<i64>,
    duration: Option<i64>,
    description: Option<String>,
    created_at: i64,
    updated_at: i64,
}

impl TryFrom<TimeEntryRow> for TimeEntry {
    type Error = DbError;

    fn try_from(row: TimeEntryRow) -> DbErrorResult<Self> {
        Ok(TimeEntry {
            id: parse_uuid(TIME_ENTRIES, &row.id)?,
            account_id: parse_uuid(TIME_ENTRIES, &row.account_id)?,
            task_id: row
                .task_id
                .as_deref()
                .map(|id| parse_uuid(TIME_ENTRIES, id))
                .transpose()?,
            project_id: row
                .project_id
                .as_deref()
                .map(|id| parse_uuid(TIME_ENTRIES, id))
                .transpose()?,
            start_time: from_millis(TIME_ENTRIES, row.start_time)?,
            end_time: row
                .end_time
                .map(|ms| from_millis(TIME_ENTRIES, ms))
                .transpose()?,
            duration: row.duration,
            description: row.description,
            created_at: from_millis(TIME_ENTRIES, row.created_at)?,
            updated_at: from_millis(TIME_ENTRIES, row.updated_at)?,
        })
    }
}

#[track_caller]
fn timer_state(
    table: &'static str,
    is_tracking: bool,
    tracked_start_time: Option<i64>,
    total_tracked_time: i64,
) -> DbErrorResult<TimerState> {
    let started = tracked_start_time
        .map(|ms| from_millis(table, ms))
        .transpose()?;
    TimerState::restore(is_tracking, started, total_tracked_time)
        .map_err(|e| DbError::corrupt_row(table, e.to_string()))
}

#[track_caller]
fn parse_uuid(table: &'static str, value: &str) -> DbErrorResult<Uuid> {
    Uuid::parse_str(value)
        .map_err(|e| DbError::corrupt_row(table, format!("invalid uuid '{}': {}", value, e)))
}

#[track_caller]
fn from_millis(table: &'static str, value: i64) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp_millis(value)
        .ok_or_else(|| DbError::corrupt_row(table, format!("timestamp out of range: {}", value)))
}

pub(crate) fn opt_id(id: Option<Uuid>) -> Option<String> {
    id.map(|id| id.to_string())
}

pub(crate) fn opt_millis(value: Option<DateTime<Utc>>) -> Option<i64> {
    value.map(|dt| dt.timestamp_millis())
}
