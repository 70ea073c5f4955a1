mod client;
mod poller;
