//! Time entry ledger REST API handlers

use crate::{AccountId, ApiError, ApiResult, AppState, TimeEntryDto, TimeEntryListResponse};

use tt_db::{ProjectRepository, TaskRepository, TimeEntryRepository};

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, State},
};
use error_location::ErrorLocation;
use uuid::Uuid;

/// GET /tasks/{id}/time-entries
///
/// List a task's ledger entries, newest first
pub async fn list_task_time_entries(
    State(state): State<AppState>,
    AccountId(account_id): AccountId,
    Path(id): Path<String>,
) -> ApiResult<Json<TimeEntryListResponse>> {
    let task_id = Uuid::parse_str(&id)?;

    if TaskRepository::find_by_id(&state.pool, account_id, task_id)
        .await?
        .is_none()
    {
        return Err(ApiError::NotFound {
            message: format!("Task {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let entries = TimeEntryRepository::find_by_task(&state.pool, account_id, task_id).await?;

    Ok(Json(TimeEntryListResponse {
        time_entries: entries.into_iter().map(TimeEntryDto::from).collect(),
    }))
}

/// GET /projects/{id}/time-entries
///
/// List the project's own entries together with those of its tasks,
/// newest first
pub async fn list_project_time_entries(
    State(state): State<AppState>,
    AccountId(account_id): AccountId,
    Path(id): Path<String>,
) -> ApiResult<Json<TimeEntryListResponse>> {
    let project_id = Uuid::parse_str(&id)?;

    if ProjectRepository::find_by_id(&state.pool, account_id, project_id)
        .await?
        .is_none()
    {
        return Err(ApiError::NotFound {
            message: format!("Project {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let entries =
        TimeEntryRepository::find_by_project(&state.pool, account_id, project_id).await?;

    Ok(Json(TimeEntryListResponse {
        time_entries: entries.into_iter().map(TimeEntryDto::from).collect(),
    }))
}
