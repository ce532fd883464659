//! Listing service for directory reads and listing management.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::server_listing::ServerListingRepository,
    error::AppError,
    model::listing::{
        CreateListingParam, GetListingsParam, PaginatedListings, ServerListing,
        UpdateListingParam,
    },
};

pub struct ListingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ListingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a page of the public directory, most recently bumped first.
    pub async fn get_paginated(
        &self,
        param: GetListingsParam,
    ) -> Result<PaginatedListings, AppError> {
        let repo = ServerListingRepository::new(self.db);

        repo.get_paginated(param).await
    }

    /// Gets a listing by ID.
    ///
    /// # Returns
    /// - `Ok(ServerListing)` - The listing
    /// - `Err(AppError::NotFound)` - No listing with that ID
    pub async fn get_by_id(&self, id: i32) -> Result<ServerListing, AppError> {
        let repo = ServerListingRepository::new(self.db);

        repo.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Server {} not found", id)))
    }

    /// Gets the first listing linked to a Discord guild, if any.
    pub async fn get_by_guild_id(&self, guild_id: u64) -> Result<Option<ServerListing>, AppError> {
        let repo = ServerListingRepository::new(self.db);

        Ok(repo.find_by_guild_id(guild_id).await?.into_iter().next())
    }

    /// Gets the listings owned by a Discord user.
    pub async fn get_by_owner(&self, owner_id: u64) -> Result<Vec<ServerListing>, AppError> {
        let repo = ServerListingRepository::new(self.db);

        repo.get_by_owner(owner_id).await
    }

    /// Adds a listing directly, bypassing the application flow.
    pub async fn create(&self, param: CreateListingParam) -> Result<ServerListing, AppError> {
        let repo = ServerListingRepository::new(self.db);

        let listing = repo.create(param).await?;
        tracing::info!("Listing {} ({}) created", listing.id, listing.name);

        Ok(listing)
    }

    /// Applies an owner or admin edit to a listing.
    ///
    /// # Returns
    /// - `Ok(ServerListing)` - The updated listing
    /// - `Err(AppError::NotFound)` - No listing with that ID
    pub async fn update(
        &self,
        id: i32,
        param: UpdateListingParam,
    ) -> Result<ServerListing, AppError> {
        let repo = ServerListingRepository::new(self.db);

        repo.update(id, param)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Server {} not found", id)))
    }

    /// Removes a listing and its bump history.
    ///
    /// # Returns
    /// - `Ok(())` - Listing removed
    /// - `Err(AppError::NotFound)` - No listing with that ID
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = ServerListingRepository::new(self.db);

        if !repo.delete(id).await? {
            return Err(AppError::NotFound(format!("Server {} not found", id)));
        }
        tracing::info!("Listing {} removed", id);

        Ok(())
    }

    /// Updates member counts of auto-updating listings from a gateway guild.
    pub async fn sync_guild_member_count(
        &self,
        guild_id: u64,
        member_count: u64,
    ) -> Result<u64, AppError> {
        let repo = ServerListingRepository::new(self.db);

        let member_count = i32::try_from(member_count).unwrap_or(i32::MAX);
        repo.update_member_count_by_guild(guild_id, member_count)
            .await
    }
}
