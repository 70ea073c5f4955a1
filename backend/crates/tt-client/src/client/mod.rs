pub mod client;
pub mod error;
pub mod time_entry_view;
pub mod timer_view;

pub use client::Client;
pub use error::{ClientError, Result as ClientResult};
pub use time_entry_view::{TimeEntryListView, TimeEntryView};
pub use timer_view::TimerView;
