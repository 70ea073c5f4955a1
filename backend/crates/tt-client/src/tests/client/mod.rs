mod client;
mod timer_view;
