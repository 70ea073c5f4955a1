use tt_config::ApiConfig;
use tt_core::{Clock, TimerCoordinator};
use tt_db::SqliteTimerStore;

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub coordinator: Arc<TimerCoordinator<SqliteTimerStore>>,
    pub api_config: ApiConfig,
}

impl AppState {
    pub fn new(pool: SqlitePool, clock: Arc<dyn Clock>, api_config: ApiConfig) -> Self {
        let coordinator = TimerCoordinator::new(SqliteTimerStore::new(pool.clone()), clock);
        Self {
            pool,
            coordinator: Arc::new(coordinator),
            api_config,
        }
    }

    /// Current time from the coordinator's clock
    pub fn now(&self) -> chrono::DateTime<chrono::Utc> {
        self.coordinator.clock().now()
    }
}
