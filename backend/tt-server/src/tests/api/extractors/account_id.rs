use crate::{AccountId, ApiError, AppState};

use tt_config::ApiConfig;
use tt_core::{Clock, ManualClock};

use std::sync::Arc;

use axum::{body::Body, extract::FromRequestParts, http::Request};
use chrono::Utc;

async fn create_test_state() -> AppState {
    let pool = tt_db::create_memory_pool()
        .await
        .expect("Failed to create test pool");

    AppState::new(
        pool,
        Arc::new(ManualClock::new(Utc::now())) as Arc<dyn Clock>,
        ApiConfig::default(),
    )
}

#[tokio::test]
async fn test_extractor_with_valid_header() {
    let state = create_test_state().await;
    let request = Request::builder()
        .header("X-Account-Id", "12345678-1234-1234-1234-123456789abc")
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = AccountId::from_request_parts(&mut parts, &state).await;

    assert!(result.is_ok());
    assert_eq!(
        result.unwrap().0.to_string(),
        "12345678-1234-1234-1234-123456789abc"
    );
}

#[tokio::test]
async fn test_extractor_falls_back_to_default_account_when_missing() {
    let state = create_test_state().await;
    let request = Request::builder().body(Body::empty()).unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = AccountId::from_request_parts(&mut parts, &state).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().0, state.api_config.default_account_uuid());
}

#[tokio::test]
async fn test_extractor_rejects_invalid_uuid_header() {
    let state = create_test_state().await;
    let request = Request::builder()
        .header("X-Account-Id", "not-a-valid-uuid")
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = AccountId::from_request_parts(&mut parts, &state).await;

    match result {
        Err(ApiError::Validation { field, .. }) => {
            assert_eq!(field.as_deref(), Some("X-Account-Id"));
        }
        Err(other) => panic!("expected validation error, got {other}"),
        Ok(AccountId(id)) => panic!("expected rejection, got account {id}"),
    }
}

#[tokio::test]
async fn test_extractor_trims_header_whitespace() {
    let state = create_test_state().await;
    let request = Request::builder()
        .header("X-Account-Id", " 12345678-1234-1234-1234-123456789abc ")
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = AccountId::from_request_parts(&mut parts, &state).await;

    assert!(result.is_ok());
}
