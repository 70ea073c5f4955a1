pub mod project_repository;
pub mod task_repository;
pub mod time_entry_repository;
pub mod timer_lock_repository;
