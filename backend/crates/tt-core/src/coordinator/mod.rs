pub mod timer_coordinator;
pub mod timer_store;
pub mod transition;
