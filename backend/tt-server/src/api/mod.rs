pub mod error;
pub mod extractors;
pub mod projects;
pub mod tasks;
pub mod time_entries;
pub mod time_tracking;
