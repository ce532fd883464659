mod application;
mod bump_event;
mod server_listing;
