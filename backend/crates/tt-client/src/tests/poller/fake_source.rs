//! In-process stand-in for the server side of a single timer

use crate::{ClientError, ClientResult, TimerSource, TimerView};

use tt_core::Clock;

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use tokio::time::Instant;
use uuid::Uuid;

pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 14, 9, 0, 0).unwrap()
}

/// Wall clock that follows tokio's (pausable) time
pub struct TokioClock {
    base: DateTime<Utc>,
    origin: Instant,
}

impl TokioClock {
    pub fn new(base: DateTime<Utc>) -> Self {
        Self {
            base,
            origin: Instant::now(),
        }
    }
}

impl Clock for TokioClock {
    fn now(&self) -> DateTime<Utc> {
        let elapsed = Instant::now() - self.origin;
        self.base + Duration::milliseconds(elapsed.as_millis() as i64)
    }
}

pub struct FakeServer {
    pub is_tracking: bool,
    pub tracked_start_time: Option<DateTime<Utc>>,
    pub total_tracked_time: i64,
    pub fail_fetch: bool,
    pub fail_action: bool,
    pub fetches: usize,
    pub actions: usize,
}

#[derive(Clone)]
pub struct FakeSource {
    pub id: Uuid,
    pub server: Arc<Mutex<FakeServer>>,
    pub clock: Arc<dyn Clock>,
}

impl FakeSource {
    pub fn idle(clock: Arc<dyn Clock>) -> Self {
        Self {
            id: Uuid::new_v4(),
            server: Arc::new(Mutex::new(FakeServer {
                is_tracking: false,
                tracked_start_time: None,
                total_tracked_time: 0,
                fail_fetch: false,
                fail_action: false,
                fetches: 0,
                actions: 0,
            })),
            clock,
        }
    }

    /// Tracking since `secs_ago` with `total` already accumulated
    pub fn tracking(clock: Arc<dyn Clock>, secs_ago: i64, total: i64) -> Self {
        let source = Self::idle(clock);
        {
            let mut server = source.server.lock().unwrap();
            server.is_tracking = true;
            server.tracked_start_time = Some(source.clock.now() - Duration::seconds(secs_ago));
            server.total_tracked_time = total;
        }
        source
    }

    pub fn fetches(&self) -> usize {
        self.server.lock().unwrap().fetches
    }

    pub fn set(&self, update: impl FnOnce(&mut FakeServer)) {
        update(&mut self.server.lock().unwrap());
    }

    fn view(&self, server: &FakeServer) -> TimerView {
        let now = self.clock.now();
        let mut view = TimerView {
            id: self.id,
            project_id: None,
            title: Some("Fake task".to_string()),
            name: None,
            is_tracking: server.is_tracking,
            tracked_start_time: server.tracked_start_time,
            total_tracked_time: server.total_tracked_time,
            elapsed_seconds: 0,
            server_time: now,
        };
        view.elapsed_seconds = view.elapsed_at(now);
        view
    }
}

#[async_trait]
impl TimerSource for FakeSource {
    async fn fetch(&self) -> ClientResult<TimerView> {
        let mut server = self.server.lock().unwrap();
        server.fetches += 1;
        if server.fail_fetch {
            return Err(ClientError::api_error("HTTP_502", "bad gateway"));
        }
        Ok(self.view(&server))
    }

    async fn start(&self) -> ClientResult<TimerView> {
        let mut server = self.server.lock().unwrap();
        server.actions += 1;
        if server.fail_action {
            return Err(ClientError::api_error("TRANSACTION_FAILED", "busy"));
        }
        if server.is_tracking {
            return Err(ClientError::api_error("ALREADY_TRACKING", "already tracking"));
        }
        server.is_tracking = true;
        server.tracked_start_time = Some(self.clock.now());
        Ok(self.view(&server))
    }

    async fn stop(&self, _description: Option<String>) -> ClientResult<TimerView> {
        let mut server = self.server.lock().unwrap();
        server.actions += 1;
        if server.fail_action {
            return Err(ClientError::api_error("TRANSACTION_FAILED", "busy"));
        }
        let Some(start) = server.tracked_start_time.take() else {
            return Err(ClientError::api_error("NOT_TRACKING", "not tracking"));
        };
        server.is_tracking = false;
        server.total_tracked_time += tt_core::elapsed_seconds(start, self.clock.now());
        Ok(self.view(&server))
    }
}
