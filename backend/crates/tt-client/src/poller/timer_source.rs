use crate::{Client, ClientResult, TimerView};

use async_trait::async_trait;
use uuid::Uuid;

/// Where the poller reads and drives a timer
#[async_trait]
pub trait TimerSource: Send + Sync + 'static {
    async fn fetch(&self) -> ClientResult<TimerView>;
    async fn start(&self) -> ClientResult<TimerView>;
    async fn stop(&self, description: Option<String>) -> ClientResult<TimerView>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerTarget {
    Task(Uuid),
    Project(Uuid),
}

/// `TimerSource` over the HTTP API
#[derive(Clone)]
pub struct ClientTimerSource {
    client: Client,
    target: TimerTarget,
}

impl ClientTimerSource {
    pub fn new(client: Client, target: TimerTarget) -> Self {
        Self { client, target }
    }

    pub fn target(&self) -> TimerTarget {
        self.target
    }
}

#[async_trait]
impl TimerSource for ClientTimerSource {
    async fn fetch(&self) -> ClientResult<TimerView> {
        match self.target {
            TimerTarget::Task(id) => self.client.get_task(id).await,
            TimerTarget::Project(id) => self.client.get_project(id).await,
        }
    }

    async fn start(&self) -> ClientResult<TimerView> {
        match self.target {
            TimerTarget::Task(id) => self.client.start_task(id).await,
            TimerTarget::Project(id) => self.client.start_project(id).await,
        }
    }

    async fn stop(&self, description: Option<String>) -> ClientResult<TimerView> {
        match self.target {
            TimerTarget::Task(id) => self.client.stop_task(id, description.as_deref()).await,
            TimerTarget::Project(id) => self.client.stop_project(id).await,
        }
    }
}
