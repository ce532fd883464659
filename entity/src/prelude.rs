pub use super::application::Entity as Application;
pub use super::bump_event::Entity as BumpEvent;
pub use super::server_listing::Entity as ServerListing;
