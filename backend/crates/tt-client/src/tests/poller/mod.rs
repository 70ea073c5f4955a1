mod fake_source;
mod poller_settings;
mod reconciliation_poller;
