use crate::TimerView;

use chrono::{Duration, TimeZone, Utc};
use googletest::prelude::*;
use serde_json::json;

fn server_task_json() -> serde_json::Value {
    json!({
        "id": "6f1d3c2a-8b4e-4f7a-9c1d-2e3f4a5b6c7d",
        "projectId": null,
        "title": "Write report",
        "isTracking": true,
        "trackedStartTime": "2026-10-14T09:00:00Z",
        "totalTrackedTime": 120,
        "elapsedSeconds": 150,
        "serverTime": "2026-10-14T09:00:30Z",
        "createdAt": "2026-10-01T08:00:00Z",
        "updatedAt": "2026-10-14T09:00:00Z"
    })
}

#[test]
fn given_server_task_json_when_parsed_then_fields_mapped() {
    let view: TimerView = serde_json::from_value(server_task_json()).unwrap();

    assert_that!(view.is_tracking, eq(true));
    assert_that!(view.total_tracked_time, eq(120));
    assert_that!(view.elapsed_seconds, eq(150));
    assert_that!(view.label(), eq("Write report"));
    assert_that!(view.project_id, none());
}

#[test]
fn given_project_json_when_parsed_then_label_uses_name() {
    let view: TimerView = serde_json::from_value(json!({
        "id": "6f1d3c2a-8b4e-4f7a-9c1d-2e3f4a5b6c7d",
        "name": "Website",
        "isTracking": false,
        "trackedStartTime": null,
        "totalTrackedTime": 75,
        "elapsedSeconds": 75,
        "serverTime": "2026-10-14T09:00:30Z"
    }))
    .unwrap();

    assert_that!(view.label(), eq("Website"));
}

#[test]
fn given_tracking_view_when_elapsed_at_later_time_then_total_plus_delta() {
    let view: TimerView = serde_json::from_value(server_task_json()).unwrap();
    let start = Utc.with_ymd_and_hms(2026, 10, 14, 9, 0, 0).unwrap();

    assert_that!(view.elapsed_at(start + Duration::seconds(45)), eq(165));
}

#[test]
fn given_server_now_before_start_when_elapsed_at_then_clamped_to_total() {
    let view: TimerView = serde_json::from_value(server_task_json()).unwrap();
    let start = Utc.with_ymd_and_hms(2026, 10, 14, 9, 0, 0).unwrap();

    assert_that!(view.elapsed_at(start - Duration::seconds(10)), eq(120));
}

#[test]
fn given_idle_view_with_stale_start_when_elapsed_at_then_total_only() {
    let mut view: TimerView = serde_json::from_value(server_task_json()).unwrap();
    view.is_tracking = false;
    let later = Utc.with_ymd_and_hms(2026, 10, 14, 12, 0, 0).unwrap();

    assert_that!(view.elapsed_at(later), eq(120));
}
