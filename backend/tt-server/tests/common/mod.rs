#![allow(dead_code)]

//! Test infrastructure for tt-server API tests

use tt_config::ApiConfig;
use tt_core::{Clock, ManualClock, Project, Task};
use tt_db::{ProjectRepository, TaskRepository};
use tt_server::{AppState, build_router};

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::{DateTime, TimeZone, Utc};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;
use uuid::Uuid;

pub const ACCOUNT: &str = "7b0c3f4e-2d7a-4c61-9a52-0f3e8d1b6a90";

pub fn account_id() -> Uuid {
    Uuid::parse_str(ACCOUNT).unwrap()
}

pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 14, 9, 0, 0).unwrap()
}

pub struct TestApp {
    pub state: AppState,
    pub clock: Arc<ManualClock>,
}

impl TestApp {
    pub fn router(&self) -> Router {
        build_router(self.state.clone())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.state.pool
    }
}

/// Create AppState over an in-memory database and a manual clock at `t0()`
pub async fn create_test_app() -> TestApp {
    let pool = tt_db::create_memory_pool()
        .await
        .expect("Failed to create test database");
    let clock = Arc::new(ManualClock::new(t0()));

    TestApp {
        state: AppState::new(pool, clock.clone() as Arc<dyn Clock>, ApiConfig::default()),
        clock,
    }
}

pub async fn create_test_project(pool: &SqlitePool, account_id: Uuid) -> Project {
    let project = Project::new(account_id, "Test Project".to_string());
    ProjectRepository::create(pool, &project)
        .await
        .expect("Failed to create test project");
    project
}

pub async fn create_test_task(
    pool: &SqlitePool,
    account_id: Uuid,
    project_id: Option<Uuid>,
) -> Task {
    let task = Task::new(account_id, project_id, "Test Task".to_string());
    TaskRepository::create(pool, &task)
        .await
        .expect("Failed to create test task");
    task
}

/// Send a request as `ACCOUNT` and decode the JSON body
pub async fn send(
    app: &TestApp,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("X-Account-Id", ACCOUNT);

    let request = match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.router().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
    };

    (status, json)
}
