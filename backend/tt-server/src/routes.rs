use crate::{
    AppState, get_project, get_task, health, list_project_time_entries, list_task_time_entries,
    move_task, project_time_tracking, task_time_tracking,
};

use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Tasks
        .route("/tasks/{id}", get(get_task))
        .route("/tasks/{id}/time-tracking", post(task_time_tracking))
        .route("/tasks/{id}/time-entries", get(list_task_time_entries))
        .route("/tasks/{id}/project", put(move_task))
        // Projects
        .route("/projects/{id}", get(get_project))
        .route("/projects/{id}/time-tracking", post(project_time_tracking))
        .route("/projects/{id}/time-entries", get(list_project_time_entries))
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
