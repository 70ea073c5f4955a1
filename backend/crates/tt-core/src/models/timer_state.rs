//! Timer state machine shared by tasks and projects.
//!
//! A timer is either `Idle` or `Tracking` since some instant, and carries the
//! total of every interval already closed. While tracking, the total is a
//! frozen snapshot; live displays add the running delta on top.
//!
//! Transitions are `pub(crate)`: outside this crate a timer can be read or
//! rehydrated from storage, but only the coordinator moves it.

use crate::clock::{elapsed_seconds, live_elapsed};
use crate::{CoreError, Result as CoreErrorResult, TimerOwner};

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPhase {
    Idle,
    Tracking { since: DateTime<Utc> },
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerState {
    is_tracking: bool,
    tracked_start_time: Option<DateTime<Utc>>,
    total_tracked_time: i64,
}

impl TimerState {
    /// Rebuild a timer from persisted fields, rejecting rows that break the
    /// "start time present iff tracking" rule.
    #[track_caller]
    pub fn restore(
        is_tracking: bool,
        tracked_start_time: Option<DateTime<Utc>>,
        total_tracked_time: i64,
    ) -> CoreErrorResult<Self> {
        if is_tracking != tracked_start_time.is_some() {
            return Err(CoreError::validation(format!(
                "is_tracking={} but tracked_start_time={:?}",
                is_tracking, tracked_start_time
            )));
        }

        if total_tracked_time < 0 {
            return Err(CoreError::validation(format!(
                "total_tracked_time must be >= 0, got {}",
                total_tracked_time
            )));
        }

        Ok(Self {
            is_tracking,
            tracked_start_time,
            total_tracked_time,
        })
    }

    pub fn is_tracking(&self) -> bool {
        self.is_tracking
    }

    pub fn tracked_start_time(&self) -> Option<DateTime<Utc>> {
        self.tracked_start_time
    }

    pub fn total_tracked_time(&self) -> i64 {
        self.total_tracked_time
    }

    pub fn phase(&self) -> TimerPhase {
        match self.tracked_start_time {
            Some(since) => TimerPhase::Tracking { since },
            None => TimerPhase::Idle,
        }
    }

    /// Total plus the running delta, for display.
    pub fn live_elapsed(&self, now: DateTime<Utc>) -> i64 {
        live_elapsed(self.total_tracked_time, self.tracked_start_time, now)
    }

    /// Idle -> Tracking
    #[track_caller]
    pub(crate) fn start(&mut self, owner: TimerOwner, now: DateTime<Utc>) -> CoreErrorResult<()> {
        if self.is_tracking {
            return Err(CoreError::already_tracking(owner));
        }

        self.is_tracking = true;
        self.tracked_start_time = Some(now);
        Ok(())
    }

    /// Tracking -> Idle. Returns the seconds added to the total.
    #[track_caller]
    pub(crate) fn stop(&mut self, owner: TimerOwner, now: DateTime<Utc>) -> CoreErrorResult<i64> {
        let started = match self.phase() {
            TimerPhase::Tracking { since } => since,
            TimerPhase::Idle => return Err(CoreError::not_tracking(owner)),
        };

        let elapsed = elapsed_seconds(started, now);
        self.total_tracked_time += elapsed;
        self.is_tracking = false;
        self.tracked_start_time = None;
        Ok(elapsed)
    }
}
