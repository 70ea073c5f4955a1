use super::fake_source::{FakeSource, TokioClock, t0};

use crate::{PollerHandle, PollerSettings, ReconciliationPoller};

use tt_core::Clock;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use chrono::Duration as ChronoDuration;
use googletest::prelude::*;
use tokio::time::sleep;

fn local_clock() -> Arc<dyn Clock> {
    Arc::new(TokioClock::new(t0()))
}

async fn spawn_loaded(source: FakeSource, clock: Arc<dyn Clock>) -> PollerHandle {
    let handle = ReconciliationPoller::new(source, clock)
        .with_settings(PollerSettings::default())
        .spawn();
    handle
        .subscribe()
        .wait_for(|state| state.is_loaded())
        .await
        .unwrap();
    handle
}

#[tokio::test(start_paused = true)]
async fn given_tracking_timer_when_mounted_then_adopts_server_elapsed() {
    // Given
    let clock = local_clock();
    let source = FakeSource::tracking(clock.clone(), 30, 100);

    // When
    let handle = spawn_loaded(source.clone(), clock).await;

    // Then
    let state = handle.state();
    assert_that!(state.is_tracking, eq(true));
    assert_that!(state.elapsed_seconds, eq(130));
    assert_that!(state.last_error.as_deref(), none());
    assert_that!(source.fetches(), eq(1));
}

#[tokio::test(start_paused = true)]
async fn given_running_poller_when_time_passes_then_refetches_every_refresh_interval() {
    // Given
    let clock = local_clock();
    let source = FakeSource::idle(clock.clone());
    let _handle = spawn_loaded(source.clone(), clock).await;

    // When
    sleep(Duration::from_secs(11)).await;

    // Then: mount, 5s, 10s
    assert_that!(source.fetches(), eq(3));
}

#[tokio::test(start_paused = true)]
async fn given_tracking_timer_when_ticking_then_elapsed_advances_without_fetching() {
    // Given
    let clock = local_clock();
    let source = FakeSource::tracking(clock.clone(), 0, 0);
    let handle = spawn_loaded(source.clone(), clock).await;

    // When
    sleep(Duration::from_millis(3500)).await;

    // Then
    assert_that!(handle.state().elapsed_seconds, eq(3));
    assert_that!(source.fetches(), eq(1));
}

#[tokio::test(start_paused = true)]
async fn given_idle_timer_when_ticking_then_elapsed_stays_at_total() {
    // Given
    let clock = local_clock();
    let source = FakeSource::idle(clock.clone());
    source.set(|server| server.total_tracked_time = 40);
    let handle = spawn_loaded(source, clock).await;

    // When
    sleep(Duration::from_millis(3500)).await;

    // Then
    assert_that!(handle.state().elapsed_seconds, eq(40));
}

#[tokio::test(start_paused = true)]
async fn given_fetch_failures_when_refreshing_then_tracking_state_kept_and_error_published() {
    // Given
    let clock = local_clock();
    let source = FakeSource::tracking(clock.clone(), 10, 0);
    let handle = spawn_loaded(source.clone(), clock).await;
    source.set(|server| server.fail_fetch = true);

    // When
    sleep(Duration::from_millis(6500)).await;

    // Then
    let state = handle.state();
    assert_that!(state.is_tracking, eq(true));
    assert!(state.last_error.is_some());
    // The display keeps ticking from the last canonical snapshot
    assert_that!(state.elapsed_seconds, eq(16));
}

#[tokio::test(start_paused = true)]
async fn given_failed_fetch_when_next_fetch_succeeds_then_error_cleared() {
    // Given
    let clock = local_clock();
    let source = FakeSource::idle(clock.clone());
    let handle = spawn_loaded(source.clone(), clock).await;
    source.set(|server| server.fail_fetch = true);
    sleep(Duration::from_millis(5100)).await;
    assert!(handle.state().last_error.is_some());

    // When
    source.set(|server| server.fail_fetch = false);
    sleep(Duration::from_secs(5)).await;

    // Then
    assert_that!(handle.state().last_error.as_deref(), none());
}

#[tokio::test(start_paused = true)]
async fn given_server_side_start_when_refreshed_then_new_state_adopted() {
    // Given
    let clock = local_clock();
    let source = FakeSource::idle(clock.clone());
    let handle = spawn_loaded(source.clone(), clock.clone()).await;

    // When: another device starts the timer
    let started_at = clock.now();
    source.set(|server| {
        server.is_tracking = true;
        server.tracked_start_time = Some(started_at);
    });
    sleep(Duration::from_millis(5500)).await;

    // Then
    let state = handle.state();
    assert_that!(state.is_tracking, eq(true));
    assert_that!(state.elapsed_seconds, eq(5));
}

#[tokio::test(start_paused = true)]
async fn given_focus_notification_when_received_then_immediate_refetch() {
    // Given
    let clock = local_clock();
    let source = FakeSource::idle(clock.clone());
    let handle = spawn_loaded(source.clone(), clock).await;

    // When
    handle.notify_focus();
    sleep(Duration::from_millis(10)).await;
    handle.notify_visible();
    sleep(Duration::from_millis(10)).await;

    // Then
    assert_that!(source.fetches(), eq(3));
}

#[tokio::test(start_paused = true)]
async fn given_idle_timer_when_started_through_handle_then_adopts_and_fires_callback() {
    // Given
    let clock = local_clock();
    let source = FakeSource::idle(clock.clone());
    let updates = Arc::new(AtomicUsize::new(0));
    let counter = updates.clone();
    let handle = ReconciliationPoller::new(source.clone(), clock)
        .on_time_update(move |view| {
            assert!(view.is_tracking);
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .spawn();

    // When
    let view = handle.start().await.unwrap();

    // Then
    assert_that!(view.is_tracking, eq(true));
    assert_that!(handle.state().is_tracking, eq(true));
    assert_that!(updates.load(Ordering::SeqCst), eq(1));
}

#[tokio::test(start_paused = true)]
async fn given_tracking_timer_when_stopped_through_handle_then_total_adopted() {
    // Given
    let clock = local_clock();
    let source = FakeSource::tracking(clock.clone(), 0, 20);
    let handle = spawn_loaded(source, clock).await;
    sleep(Duration::from_millis(4200)).await;

    // When
    let view = handle.stop(Some("done".to_string())).await.unwrap();

    // Then
    assert_that!(view.total_tracked_time, eq(24));
    let state = handle.state();
    assert_that!(state.is_tracking, eq(false));
    assert_that!(state.elapsed_seconds, eq(24));
}

#[tokio::test(start_paused = true)]
async fn given_failing_action_when_started_then_error_shown_and_recovery_refetch_scheduled() {
    // Given
    let clock = local_clock();
    let source = FakeSource::idle(clock.clone());
    let handle = spawn_loaded(source.clone(), clock).await;
    source.set(|server| server.fail_action = true);

    // When
    let result = handle.start().await;

    // Then
    assert!(result.is_err());
    let state = handle.state();
    assert_that!(state.is_tracking, eq(false));
    assert!(state.last_error.is_some());

    // Recovery at 2s, before the 5s refresh
    sleep(Duration::from_millis(2100)).await;
    assert_that!(source.fetches(), eq(2));
}

#[tokio::test(start_paused = true)]
async fn given_server_clock_ahead_when_adopting_then_elapsed_computed_in_server_time() {
    // Given: server runs one hour ahead of this machine
    let local = local_clock();
    let server_clock: Arc<dyn Clock> = Arc::new(TokioClock::new(t0() + ChronoDuration::hours(1)));
    let source = FakeSource::tracking(server_clock, 10, 0);

    // When
    let handle = spawn_loaded(source, local).await;
    sleep(Duration::from_millis(2500)).await;

    // Then
    let state = handle.state();
    assert_that!(state.elapsed_seconds, eq(12));
    assert_that!(state.skew_millis, eq(3_600_000));
}

#[tokio::test(start_paused = true)]
async fn given_server_clock_behind_when_adopting_then_elapsed_not_negative() {
    // Given: server started the timer "in the future" relative to this machine
    let local = local_clock();
    let server_clock: Arc<dyn Clock> =
        Arc::new(TokioClock::new(t0() - ChronoDuration::minutes(10)));
    let source = FakeSource::tracking(server_clock, 0, 0);

    // When
    let handle = spawn_loaded(source, local).await;

    // Then
    assert_that!(handle.state().elapsed_seconds, eq(0));
}

#[tokio::test(start_paused = true)]
async fn given_shutdown_when_time_passes_then_no_more_fetches() {
    // Given
    let clock = local_clock();
    let source = FakeSource::idle(clock.clone());
    let handle = spawn_loaded(source.clone(), clock).await;

    // When
    handle.shutdown().await;
    sleep(Duration::from_secs(20)).await;

    // Then
    assert_that!(source.fetches(), eq(1));
}

#[tokio::test(start_paused = true)]
async fn given_dropped_handle_when_time_passes_then_loop_aborted() {
    // Given
    let clock = local_clock();
    let source = FakeSource::idle(clock.clone());
    let handle = spawn_loaded(source.clone(), clock).await;

    // When
    drop(handle);
    sleep(Duration::from_secs(20)).await;

    // Then
    assert_that!(source.fetches(), eq(1));
}

#[tokio::test(start_paused = true)]
async fn given_zero_intervals_when_spawned_then_loop_runs_at_minimum_period() {
    // Given
    let clock = local_clock();
    let source = FakeSource::tracking(clock.clone(), 0, 0);
    let settings = PollerSettings {
        refresh_interval: Duration::ZERO,
        tick_interval: Duration::ZERO,
        recovery_delay: Duration::ZERO,
    };

    // When
    let handle = ReconciliationPoller::new(source.clone(), clock)
        .with_settings(settings)
        .spawn();
    sleep(Duration::from_millis(350)).await;

    // Then: mount, 100ms, 200ms, 300ms
    assert_that!(handle.is_running(), eq(true));
    assert_that!(source.fetches(), eq(4));
    assert_that!(handle.state().is_loaded(), eq(true));
}
