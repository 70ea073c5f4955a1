pub mod time_tracking;
pub mod time_tracking_request;
