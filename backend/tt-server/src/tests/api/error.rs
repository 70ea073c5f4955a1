use crate::ApiError;

use tt_core::{CoreError, TimerOwner};

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;
use uuid::Uuid;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::NotFound {
        message: "Task not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "Task not found");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::Validation {
        message: "Description too long".into(),
        field: Some("description".into()),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "description");
}

#[tokio::test]
async fn test_not_tracking_maps_to_404_not_tracking() {
    let error = ApiError::from(CoreError::not_tracking(TimerOwner::Task(Uuid::new_v4())));

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_TRACKING");
}

#[tokio::test]
async fn test_already_tracking_maps_to_409() {
    let error = ApiError::from(CoreError::already_tracking(TimerOwner::Project(
        Uuid::new_v4(),
    )));

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"]["code"], "ALREADY_TRACKING");
}

#[tokio::test]
async fn test_tracking_active_maps_to_409() {
    let error = ApiError::from(CoreError::tracking_active(TimerOwner::Task(Uuid::new_v4())));

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"]["code"], "TRACKING_ACTIVE");
}

#[tokio::test]
async fn test_retryable_transaction_failure_maps_to_503() {
    let error = ApiError::from(CoreError::transaction("database is locked", true));

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["error"]["code"], "TRANSACTION_FAILED");
    // Storage details are not leaked to clients
    assert!(!json["error"]["message"].as_str().unwrap().contains("locked"));
}

#[tokio::test]
async fn test_permanent_transaction_failure_maps_to_500() {
    let error = ApiError::from(CoreError::transaction("constraint failed", false));

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
}

#[tokio::test]
async fn test_core_not_found_includes_entity_and_id() {
    let id = Uuid::new_v4();
    let error = ApiError::from(CoreError::not_found("Task", id));

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    let message = json["error"]["message"].as_str().unwrap();
    assert!(message.contains(&id.to_string()));
}

#[tokio::test]
async fn test_uuid_parse_error_maps_to_validation() {
    let error = ApiError::from(Uuid::parse_str("nope").unwrap_err());

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
}
