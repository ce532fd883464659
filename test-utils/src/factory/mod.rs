//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let listing = factory::server_listing::ServerListingFactory::new(&db)
//!     .owner_id("123456789")
//!     .bump_count(5)
//!     .build()
//!     .await?;
//!
//! let application = factory::create_application(&db).await?;
//! ```
//!
//! # Available Factories
//!
//! - `server_listing` - Create server listing entities
//! - `application` - Create pending application entities
//! - `bump_event` - Create bump audit entities
//! - `helpers` - ID generation and multi-entity helpers

pub mod application;
pub mod bump_event;
pub mod helpers;
pub mod server_listing;

pub use application::create_application;
pub use bump_event::create_bump_event;
pub use server_listing::{create_listing, create_listing_with_bump_count};
