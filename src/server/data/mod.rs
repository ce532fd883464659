//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to keep the data layer separate from business logic.

pub mod application;
pub mod bump_event;
pub mod server_listing;

#[cfg(test)]
mod test;
