//! Server listing factory for creating test listing entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test server listings with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::server_listing::ServerListingFactory;
///
/// let listing = ServerListingFactory::new(&db)
///     .name("Alliance HQ")
///     .owner_id("123456789")
///     .last_bump_at(Some(Utc::now()))
///     .build()
///     .await?;
/// ```
pub struct ServerListingFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: String,
    invite_link: String,
    member_count: i32,
    logo_url: Option<String>,
    verified: bool,
    tags: String,
    owner_id: Option<String>,
    guild_id: Option<String>,
    last_bump_at: Option<DateTime<Utc>>,
    bump_count: i32,
    auto_update: bool,
}

impl<'a> ServerListingFactory<'a> {
    /// Creates a new ServerListingFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Server {id}"`
    /// - invite_link: `"https://discord.gg/invite{id}"`
    /// - member_count: `100`
    /// - no owner, no guild, never bumped, bump_count `0`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Server {}", id),
            description: format!("Description for server {}", id),
            invite_link: format!("https://discord.gg/invite{}", id),
            member_count: 100,
            logo_url: None,
            verified: false,
            tags: String::new(),
            owner_id: None,
            guild_id: None,
            last_bump_at: None,
            bump_count: 0,
            auto_update: false,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn invite_link(mut self, invite_link: impl Into<String>) -> Self {
        self.invite_link = invite_link.into();
        self
    }

    pub fn member_count(mut self, member_count: i32) -> Self {
        self.member_count = member_count;
        self
    }

    pub fn verified(mut self, verified: bool) -> Self {
        self.verified = verified;
        self
    }

    /// Sets the tags as they are stored (comma-separated).
    pub fn tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = tags.into();
        self
    }

    pub fn owner_id(mut self, owner_id: impl Into<String>) -> Self {
        self.owner_id = Some(owner_id.into());
        self
    }

    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = Some(guild_id.into());
        self
    }

    pub fn last_bump_at(mut self, last_bump_at: Option<DateTime<Utc>>) -> Self {
        self.last_bump_at = last_bump_at;
        self
    }

    pub fn bump_count(mut self, bump_count: i32) -> Self {
        self.bump_count = bump_count;
        self
    }

    pub fn auto_update(mut self, auto_update: bool) -> Self {
        self.auto_update = auto_update;
        self
    }

    /// Builds and inserts the listing entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::server_listing::Model)` - Created listing entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::server_listing::Model, DbErr> {
        entity::server_listing::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            invite_link: ActiveValue::Set(self.invite_link),
            member_count: ActiveValue::Set(self.member_count),
            logo_url: ActiveValue::Set(self.logo_url),
            verified: ActiveValue::Set(self.verified),
            tags: ActiveValue::Set(self.tags),
            owner_id: ActiveValue::Set(self.owner_id),
            guild_id: ActiveValue::Set(self.guild_id),
            last_bump_at: ActiveValue::Set(self.last_bump_at),
            bump_count: ActiveValue::Set(self.bump_count),
            auto_update: ActiveValue::Set(self.auto_update),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a listing with default values.
///
/// Shorthand for `ServerListingFactory::new(db).build().await`.
pub async fn create_listing(
    db: &DatabaseConnection,
) -> Result<entity::server_listing::Model, DbErr> {
    ServerListingFactory::new(db).build().await
}

/// Creates a listing with a specific bump count and no last bump timestamp.
pub async fn create_listing_with_bump_count(
    db: &DatabaseConnection,
    bump_count: i32,
) -> Result<entity::server_listing::Model, DbErr> {
    ServerListingFactory::new(db)
        .bump_count(bump_count)
        .build()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;

    #[tokio::test]
    async fn creates_listing_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_listing_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let listing = create_listing(db).await?;

        assert!(!listing.name.is_empty());
        assert!(listing.invite_link.starts_with("https://discord.gg/"));
        assert_eq!(listing.bump_count, 0);
        assert!(listing.last_bump_at.is_none());
        assert!(listing.owner_id.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn creates_listing_with_custom_values() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_listing_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let listing = ServerListingFactory::new(db)
            .name("Alliance HQ")
            .owner_id("123456789")
            .guild_id("555")
            .bump_count(7)
            .auto_update(true)
            .build()
            .await?;

        assert_eq!(listing.name, "Alliance HQ");
        assert_eq!(listing.owner_id.as_deref(), Some("123456789"));
        assert_eq!(listing.guild_id.as_deref(), Some("555"));
        assert_eq!(listing.bump_count, 7);
        assert!(listing.auto_update);

        Ok(())
    }
}
