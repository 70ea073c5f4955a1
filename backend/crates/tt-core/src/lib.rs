pub mod clock;
pub mod coordinator;
pub mod error;
pub mod models;


pub use clock::{
    Clock, ManualClock, SystemClock, elapsed_seconds, format_hms, live_elapsed,
    to_stored_precision,
};
pub use coordinator::timer_coordinator::{MAX_DESCRIPTION_LENGTH, TimerCoordinator};
pub use coordinator::timer_store::{TimerStore, TimerTransaction};
pub use coordinator::transition::{StoppedTimer, Transition};
pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::owner_kind::OwnerKind;
pub use models::project::Project;
pub use models::task::Task;
pub use models::time_entry::TimeEntry;
pub use models::timer_owner::TimerOwner;
pub use models::timer_state::{TimerPhase, TimerState};
