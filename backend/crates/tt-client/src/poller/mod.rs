pub mod display_state;
pub mod poller_handle;
pub mod poller_settings;
pub mod reconciliation_poller;
pub mod timer_source;

pub use display_state::DisplayState;
pub use poller_handle::PollerHandle;
pub use poller_settings::{MIN_POLL_INTERVAL, PollerSettings};
pub use reconciliation_poller::{ReconciliationPoller, TimeUpdateCallback};
pub use timer_source::{ClientTimerSource, TimerSource, TimerTarget};
