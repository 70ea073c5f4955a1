#![allow(dead_code)]

use std::path::Path;
use std::time::Duration;

use sqlx::SqlitePool;
use tt_db::PoolOptions;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    tt_db::create_memory_pool()
        .await
        .expect("Failed to create test pool")
}

/// File-backed pool with several connections, for tests that need real
/// writer contention
pub async fn create_file_pool(dir: &Path) -> SqlitePool {
    let options = PoolOptions {
        max_connections: 8,
        busy_timeout: Duration::from_secs(10),
    };
    tt_db::create_pool(&dir.join("timers.db"), &options)
        .await
        .expect("Failed to create file pool")
}
