pub mod connection;
pub mod error;
pub mod repositories;
pub mod timer_store;

mod rows;


pub use connection::sqlite_pool::{PoolOptions, create_memory_pool, create_pool, run_migrations};
pub use error::{DbError, Result};
pub use repositories::project_repository::ProjectRepository;
pub use repositories::task_repository::TaskRepository;
pub use repositories::time_entry_repository::TimeEntryRepository;
pub use repositories::timer_lock_repository::TimerLockRepository;
pub use timer_store::{SqliteTimerStore, SqliteTimerTransaction};
