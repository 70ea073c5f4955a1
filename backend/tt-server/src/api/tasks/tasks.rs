//! Task REST API handlers

use crate::{AccountId, ApiError, ApiResult, AppState, MoveTaskRequest, TaskDto};

use tt_db::TaskRepository;

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use error_location::ErrorLocation;
use uuid::Uuid;

/// GET /tasks/{id}
///
/// Snapshot of a task, including live elapsed time when tracking
pub async fn get_task(
    State(state): State<AppState>,
    AccountId(account_id): AccountId,
    Path(id): Path<String>,
) -> ApiResult<Json<TaskDto>> {
    let task_id = Uuid::parse_str(&id)?;

    let task = TaskRepository::find_by_id(&state.pool, account_id, task_id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("Task {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(Json(TaskDto::new(task, state.now())))
}

/// PUT /tasks/{id}/project
///
/// Move a task to another project or detach it. Rejected while the task
/// is tracking.
pub async fn move_task(
    State(state): State<AppState>,
    AccountId(account_id): AccountId,
    Path(id): Path<String>,
    body: Result<Json<MoveTaskRequest>, JsonRejection>,
) -> ApiResult<Json<TaskDto>> {
    let task_id = Uuid::parse_str(&id)?;
    let Json(req) = body?;

    let task = state
        .coordinator
        .move_task(account_id, task_id, req.project_id)
        .await?;

    Ok(Json(TaskDto::new(task, state.now())))
}
