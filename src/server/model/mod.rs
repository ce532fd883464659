//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Parameter types carry validated
//! input for a single operation.

pub mod application;
pub mod bump;
pub mod listing;
pub mod user;
