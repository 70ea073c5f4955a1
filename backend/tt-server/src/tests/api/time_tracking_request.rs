use crate::TimeTrackingRequest;

use googletest::prelude::*;

#[test]
fn given_start_action_when_parsed_then_start() {
    let req: TimeTrackingRequest = serde_json::from_str(r#"{"action":"start"}"#).unwrap();
    assert_eq!(req, TimeTrackingRequest::Start);
}

#[test]
fn given_stop_with_description_when_parsed_then_description_kept() {
    let req: TimeTrackingRequest =
        serde_json::from_str(r#"{"action":"stop","description":"Review"}"#).unwrap();

    match req {
        TimeTrackingRequest::Stop { description } => {
            assert_that!(description.as_deref(), some(eq("Review")));
        }
        other => panic!("expected stop, got {other:?}"),
    }
}

#[test]
fn given_stop_without_description_when_parsed_then_none() {
    let req: TimeTrackingRequest = serde_json::from_str(r#"{"action":"stop"}"#).unwrap();
    assert_eq!(req, TimeTrackingRequest::Stop { description: None });
}

#[test]
fn given_unknown_action_when_parsed_then_error() {
    let result = serde_json::from_str::<TimeTrackingRequest>(r#"{"action":"pause"}"#);
    assert!(result.is_err());
}
