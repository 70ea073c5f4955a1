use crate::{Client, ClientError};

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let client = Client::new("http://localhost:8300/", None);
    assert_eq!(client.base_url, "http://localhost:8300");
}

#[test]
fn test_base_url_no_trailing_slash() {
    let client = Client::new("http://localhost:8300", None);
    assert_eq!(client.base_url, "http://localhost:8300");
}

#[test]
fn test_account_id_stored() {
    let client = Client::new("http://localhost:8300", Some("account-123"));
    assert_eq!(client.account_id, Some("account-123".to_string()));
}

#[test]
fn test_account_id_none() {
    let client = Client::new("http://localhost:8300", None);
    assert!(client.account_id.is_none());
}

#[test]
fn test_api_error_exposes_code_and_user_message() {
    let error = ClientError::api_error("NOT_TRACKING", "Task is not tracking time");

    assert_eq!(error.code(), Some("NOT_TRACKING"));
    assert_eq!(
        error.user_message(),
        "Task is not tracking time (NOT_TRACKING)"
    );
}
