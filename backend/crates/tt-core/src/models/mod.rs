pub mod owner_kind;
pub mod project;
pub mod task;
pub mod time_entry;
pub mod timer_owner;
pub mod timer_state;
