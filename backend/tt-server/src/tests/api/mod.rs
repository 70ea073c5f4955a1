mod error;
mod extractors;
mod time_tracking_request;
