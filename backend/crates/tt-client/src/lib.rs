//! tt-client library
//!
//! HTTP client for tt-server and the reconciliation poller that keeps a
//! displayed timer in line with the server.

pub mod client;
pub mod poller;

#[cfg(test)]
mod tests;

pub use client::{
    Client, ClientError, ClientResult, TimeEntryListView, TimeEntryView, TimerView,
};
pub use poller::{
    ClientTimerSource, DisplayState, MIN_POLL_INTERVAL, PollerHandle, PollerSettings,
    ReconciliationPoller, TimeUpdateCallback, TimerSource, TimerTarget,
};
