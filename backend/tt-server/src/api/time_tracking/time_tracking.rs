//! Timer start/stop handlers
//!
//! Every request runs as one coordinator transaction. The response carries
//! the entity as committed, so a client that just stopped a timer sees its
//! final total without a follow-up read.

use crate::{AccountId, ApiResult, AppState, ProjectDto, TaskDto, TimeTrackingRequest};

use uuid::Uuid;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};

/// POST /tasks/{id}/time-tracking
pub async fn task_time_tracking(
    State(state): State<AppState>,
    AccountId(account_id): AccountId,
    Path(id): Path<String>,
    body: Result<Json<TimeTrackingRequest>, JsonRejection>,
) -> ApiResult<Json<TaskDto>> {
    let task_id = Uuid::parse_str(&id)?;
    let Json(req) = body?;

    let transition = match req {
        TimeTrackingRequest::Start => state.coordinator.start_task(account_id, task_id).await?,
        TimeTrackingRequest::Stop { description } => {
            state
                .coordinator
                .stop_task(account_id, task_id, description)
                .await?
        }
    };

    Ok(Json(TaskDto::new(transition.into_entity(), state.now())))
}

/// POST /projects/{id}/time-tracking
pub async fn project_time_tracking(
    State(state): State<AppState>,
    AccountId(account_id): AccountId,
    Path(id): Path<String>,
    body: Result<Json<TimeTrackingRequest>, JsonRejection>,
) -> ApiResult<Json<ProjectDto>> {
    let project_id = Uuid::parse_str(&id)?;
    let Json(req) = body?;

    let transition = match req {
        TimeTrackingRequest::Start => {
            state
                .coordinator
                .start_project(account_id, project_id)
                .await?
        }
        TimeTrackingRequest::Stop { description } => {
            if description.is_some() {
                log::debug!("Ignoring description on project stop {}", project_id);
            }
            state
                .coordinator
                .stop_project(account_id, project_id)
                .await?
        }
    };

    Ok(Json(ProjectDto::new(transition.into_entity(), state.now())))
}
