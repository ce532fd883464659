//! SeaORM entities for the alliance directory database.

pub mod prelude;

pub mod application;
pub mod bump_event;
pub mod server_listing;
