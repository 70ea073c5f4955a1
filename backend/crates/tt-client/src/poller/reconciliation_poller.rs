//! Keeps a displayed timer in line with server-authoritative state.
//!
//! The loop owns every timer it uses: the canonical refresh interval, the
//! cosmetic tick and the one-shot recovery delay. Adopting a snapshot and
//! ticking the display are separate paths. Only adoption replaces
//! `is_tracking`; a tick only recomputes elapsed from the last snapshot.
//! Failed fetches leave the adopted state alone.

use crate::{
    ClientError, ClientResult, DisplayState, PollerHandle, PollerSettings, TimerSource, TimerView,
};

use tt_core::Clock;

use std::sync::Arc;

use chrono::{DateTime, Duration as ChronoDuration, Utc};
use log::{debug, info, warn};
use tokio::sync::{mpsc, oneshot, watch};
use tokio::time::{Instant, MissedTickBehavior, interval_at, sleep_until};

/// Fired with the server's returned entity after a successful start or stop
pub type TimeUpdateCallback = Arc<dyn Fn(&TimerView) + Send + Sync>;

/// Why an out-of-band refresh was requested
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RefreshReason {
    Focus,
    Visible,
    Manual,
}

pub(crate) enum Command {
    Refresh(RefreshReason),
    Start {
        reply: oneshot::Sender<ClientResult<TimerView>>,
    },
    Stop {
        description: Option<String>,
        reply: oneshot::Sender<ClientResult<TimerView>>,
    },
    Shutdown,
}

pub struct ReconciliationPoller<S: TimerSource> {
    source: Arc<S>,
    clock: Arc<dyn Clock>,
    settings: PollerSettings,
    on_time_update: Option<TimeUpdateCallback>,
}

impl<S: TimerSource> ReconciliationPoller<S> {
    pub fn new(source: S, clock: Arc<dyn Clock>) -> Self {
        Self {
            source: Arc::new(source),
            clock,
            settings: PollerSettings::default(),
            on_time_update: None,
        }
    }

    pub fn with_settings(mut self, settings: PollerSettings) -> Self {
        let clamped = settings.clamped();
        if clamped != settings {
            warn!(
                "Poller intervals below {:?} raised: {:?}",
                crate::MIN_POLL_INTERVAL,
                clamped
            );
        }
        self.settings = clamped;
        self
    }

    pub fn on_time_update<F>(mut self, callback: F) -> Self
    where
        F: Fn(&TimerView) + Send + Sync + 'static,
    {
        self.on_time_update = Some(Arc::new(callback));
        self
    }

    /// Spawn the loop on the current tokio runtime
    pub fn spawn(self) -> PollerHandle {
        let (command_tx, command_rx) = mpsc::channel(16);
        let (state_tx, state_rx) = watch::channel(DisplayState::default());

        let worker = PollerLoop {
            source: self.source,
            clock: self.clock,
            settings: self.settings,
            on_time_update: self.on_time_update,
            state_tx,
            canonical: None,
            skew: ChronoDuration::zero(),
            recovery_at: None,
        };
        let task = tokio::spawn(worker.run(command_rx));

        PollerHandle::new(command_tx, state_rx, task)
    }
}

struct PollerLoop<S: TimerSource> {
    source: Arc<S>,
    clock: Arc<dyn Clock>,
    settings: PollerSettings,
    on_time_update: Option<TimeUpdateCallback>,
    state_tx: watch::Sender<DisplayState>,
    canonical: Option<TimerView>,
    /// Server clock minus local clock at the last adoption
    skew: ChronoDuration,
    recovery_at: Option<Instant>,
}

impl<S: TimerSource> PollerLoop<S> {
    async fn run(mut self, mut commands: mpsc::Receiver<Command>) {
        // Mount
        self.refresh().await;

        let start = Instant::now();
        let refresh_period = self.settings.refresh_interval;
        let mut refresh = interval_at(start + refresh_period, refresh_period);
        refresh.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let tick_period = self.settings.tick_interval;
        let mut tick = interval_at(start + tick_period, tick_period);
        tick.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            let tracking = self.is_tracking();
            let recovery_at = self.recovery_at;

            tokio::select! {
                _ = refresh.tick() => self.refresh().await,
                _ = tick.tick(), if tracking => self.recompute(),
                _ = sleep_until(recovery_at.unwrap_or(start)), if recovery_at.is_some() => {
                    self.recovery_at = None;
                    debug!("Recovery refresh after failed timer action");
                    self.refresh().await;
                }
                command = commands.recv() => match command {
                    None | Some(Command::Shutdown) => break,
                    Some(Command::Refresh(reason)) => {
                        debug!("Out-of-band refresh: {:?}", reason);
                        self.refresh().await;
                        refresh.reset();
                    }
                    Some(Command::Start { reply }) => {
                        let result = self.source.start().await;
                        let _ = reply.send(self.apply_action("start", result));
                    }
                    Some(Command::Stop { description, reply }) => {
                        let result = self.source.stop(description).await;
                        let _ = reply.send(self.apply_action("stop", result));
                    }
                },
            }
        }

        debug!("Reconciliation poller stopped");
    }

    fn is_tracking(&self) -> bool {
        self.canonical.as_ref().is_some_and(|view| view.is_tracking)
    }

    fn server_now(&self) -> DateTime<Utc> {
        self.clock.now() + self.skew
    }

    async fn refresh(&mut self) {
        match self.source.fetch().await {
            Ok(view) => self.adopt(view),
            Err(e) => {
                warn!("Timer refresh failed: {}", e);
                self.publish_error(&e);
            }
        }
    }

    fn apply_action(
        &mut self,
        action: &str,
        result: ClientResult<TimerView>,
    ) -> ClientResult<TimerView> {
        match result {
            Ok(view) => {
                info!("Timer {} confirmed for {}", action, view.id);
                self.adopt(view.clone());
                if let Some(callback) = &self.on_time_update {
                    callback(&view);
                }
                Ok(view)
            }
            Err(e) => {
                warn!("Timer {} failed: {}", action, e);
                self.publish_error(&e);
                self.recovery_at = Some(Instant::now() + self.settings.recovery_delay);
                Err(e)
            }
        }
    }

    /// Replace the canonical snapshot and re-derive the display from it
    fn adopt(&mut self, view: TimerView) {
        let local_now = self.clock.now();
        self.skew = view.server_time - local_now;

        if let Some(previous) = &self.canonical
            && previous.is_tracking != view.is_tracking
        {
            info!(
                "Timer {} changed on server: tracking {} -> {}",
                view.id, previous.is_tracking, view.is_tracking
            );
        }

        let elapsed = view.elapsed_at(self.server_now());
        let is_tracking = view.is_tracking;
        let skew_millis = self.skew.num_milliseconds();
        self.canonical = Some(view.clone());

        self.state_tx.send_modify(|state| {
            state.snapshot = Some(view);
            state.is_tracking = is_tracking;
            state.elapsed_seconds = elapsed;
            state.last_error = None;
            state.last_synced_at = Some(local_now);
            state.skew_millis = skew_millis;
        });
    }

    /// Cosmetic tick: recompute elapsed from the last canonical snapshot
    fn recompute(&mut self) {
        let Some(view) = &self.canonical else {
            return;
        };
        let elapsed = view.elapsed_at(self.server_now());

        self.state_tx.send_if_modified(|state| {
            if state.elapsed_seconds == elapsed {
                false
            } else {
                state.elapsed_seconds = elapsed;
                true
            }
        });
    }

    fn publish_error(&self, error: &ClientError) {
        let message = error.user_message();
        self.state_tx.send_modify(|state| {
            state.last_error = Some(message);
        });
    }
}
