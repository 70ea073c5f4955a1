use serde::Deserialize;

/// Body of `POST /{tasks|projects}/{id}/time-tracking`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum TimeTrackingRequest {
    Start,
    Stop {
        /// Note attached to the closed ledger entry (tasks only)
        #[serde(default)]
        description: Option<String>,
    },
}
