use crate::tests::t0;
use crate::{TimeEntry, TimerOwner};

use chrono::Duration;
use googletest::prelude::*;
use uuid::Uuid;

#[test]
fn given_task_entry_then_owner_is_task_even_with_project() {
    let task_id = Uuid::new_v4();
    let project_id = Uuid::new_v4();

    let entry = TimeEntry::open_for_task(Uuid::new_v4(), task_id, Some(project_id), t0());

    assert_eq!(entry.owner(), Some(TimerOwner::Task(task_id)));
    assert_that!(entry.project_id, some(eq(project_id)));
    assert_that!(entry.is_open(), eq(true));
}

#[test]
fn given_project_entry_then_owner_is_project() {
    let project_id = Uuid::new_v4();

    let entry = TimeEntry::open_for_project(Uuid::new_v4(), project_id, t0());

    assert_eq!(entry.owner(), Some(TimerOwner::Project(project_id)));
    assert_that!(entry.task_id, none());
}

#[test]
fn given_open_entry_when_closed_then_duration_matches_interval() {
    let mut entry = TimeEntry::open_for_project(Uuid::new_v4(), Uuid::new_v4(), t0());
    let end = t0() + Duration::seconds(1_800);

    let duration = entry.close(end, Some("Planning".to_string()));

    assert_that!(duration, eq(1_800));
    assert_that!(entry.end_time, some(eq(end)));
    assert_that!(entry.duration, some(eq(1_800)));
    assert_that!(entry.description.as_deref(), some(eq("Planning")));
    assert_that!(entry.is_open(), eq(false));
}

#[test]
fn given_closed_without_description_then_keeps_existing_one() {
    let mut entry = TimeEntry::open_for_project(Uuid::new_v4(), Uuid::new_v4(), t0());
    entry.description = Some("Kickoff".to_string());

    entry.close(t0() + Duration::seconds(10), None);

    assert_that!(entry.description.as_deref(), some(eq("Kickoff")));
}
