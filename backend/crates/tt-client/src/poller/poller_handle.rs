use crate::poller::reconciliation_poller::{Command, RefreshReason};
use crate::{ClientError, ClientResult, DisplayState, TimerView};

use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;

/// Owner of a running poller. Dropping the handle aborts the loop.
pub struct PollerHandle {
    commands: mpsc::Sender<Command>,
    state: watch::Receiver<DisplayState>,
    task: Option<JoinHandle<()>>,
}

impl PollerHandle {
    pub(crate) fn new(
        commands: mpsc::Sender<Command>,
        state: watch::Receiver<DisplayState>,
        task: JoinHandle<()>,
    ) -> Self {
        Self {
            commands,
            state,
            task: Some(task),
        }
    }

    /// Current display state
    pub fn state(&self) -> DisplayState {
        self.state.borrow().clone()
    }

    /// Receiver that observes every published state change
    pub fn subscribe(&self) -> watch::Receiver<DisplayState> {
        self.state.clone()
    }

    /// Window focus regained
    pub fn notify_focus(&self) {
        self.request_refresh(RefreshReason::Focus);
    }

    /// Display became visible again
    pub fn notify_visible(&self) {
        self.request_refresh(RefreshReason::Visible);
    }

    pub fn refresh(&self) {
        self.request_refresh(RefreshReason::Manual);
    }

    fn request_refresh(&self, reason: RefreshReason) {
        // A full queue already holds a pending refresh or action
        if let Err(e) = self.commands.try_send(Command::Refresh(reason)) {
            log::debug!("Refresh request dropped: {}", e);
        }
    }

    /// Start the timer on the server and adopt the returned entity
    pub async fn start(&self) -> ClientResult<TimerView> {
        let (reply, response) = oneshot::channel();
        self.send(Command::Start { reply }).await?;
        response.await.map_err(|_| ClientError::poller_closed())?
    }

    /// Stop the timer on the server and adopt the returned entity
    pub async fn stop(&self, description: Option<String>) -> ClientResult<TimerView> {
        let (reply, response) = oneshot::channel();
        self.send(Command::Stop { description, reply }).await?;
        response.await.map_err(|_| ClientError::poller_closed())?
    }

    async fn send(&self, command: Command) -> ClientResult<()> {
        self.commands
            .send(command)
            .await
            .map_err(|_| ClientError::poller_closed())
    }

    /// Stop the loop and wait for it to finish
    pub async fn shutdown(mut self) {
        let _ = self.commands.send(Command::Shutdown).await;
        if let Some(task) = self.task.take()
            && let Err(e) = task.await
        {
            log::warn!("Poller task ended abnormally: {}", e);
        }
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
