//! Project REST API handlers

use crate::{AccountId, ApiError, ApiResult, AppState, ProjectDto};

use tt_db::ProjectRepository;

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, State},
};
use error_location::ErrorLocation;
use uuid::Uuid;

/// GET /projects/{id}
pub async fn get_project(
    State(state): State<AppState>,
    AccountId(account_id): AccountId,
    Path(id): Path<String>,
) -> ApiResult<Json<ProjectDto>> {
    let project_id = Uuid::parse_str(&id)?;

    let project = ProjectRepository::find_by_id(&state.pool, account_id, project_id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("Project {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(Json(ProjectDto::new(project, state.now())))
}
