use crate::TimeEntryDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntryListResponse {
    pub time_entries: Vec<TimeEntryDto>,
}
