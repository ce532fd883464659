//! Request and response DTOs exposed by the HTTP API.

pub mod api;
pub mod application;
pub mod bump;
pub mod listing;
pub mod user;
