//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer.
//! They implement business rules, coordinate repository calls and external APIs, and
//! work with domain models rather than DTOs or entity models.

pub mod application;
pub mod auth;
pub mod bump;
pub mod listing;
pub mod stats;
