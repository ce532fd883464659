//! HTTP request handlers.
//!
//! Controllers check access through `AuthGuard`, convert DTOs to parameter types,
//! call a service and convert the resulting domain model back to a DTO.

pub mod admin;
pub mod application;
pub mod auth;
pub mod bump;
pub mod listing;

use serde::Deserialize;

const DEFAULT_PAGE_ENTRIES: u64 = 10;
const MAX_PAGE_ENTRIES: u64 = 100;

#[derive(Deserialize)]
pub struct PaginationParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

impl PaginationParams {
    /// Page size clamped to `1..=100`.
    pub fn per_page(&self) -> u64 {
        self.entries.clamp(1, MAX_PAGE_ENTRIES)
    }
}

fn default_entries() -> u64 {
    DEFAULT_PAGE_ENTRIES
}
