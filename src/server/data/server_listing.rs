//! Server listing data repository for database operations.
//!
//! This module provides the `ServerListingRepository` for managing directory listings.
//! It covers listing CRUD, directory and leaderboard queries, the conditional bump write
//! and scheduled stat refreshes, converting entity models to domain models at the
//! infrastructure boundary.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::{Expr, NullOrdering},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait,
    DatabaseConnection, EntityTrait, Order, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{
    error::{internal::InternalError, AppError},
    model::listing::{
        CreateListingParam, GetListingsParam, PaginatedListings, RefreshStatsParam, ServerListing,
        UpdateListingParam,
    },
    util::parse::join_tags,
};

/// Repository providing database operations for server listings.
pub struct ServerListingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServerListingRepository<'a> {
    /// Creates a new ServerListingRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new listing with no bumps.
    ///
    /// # Arguments
    /// - `param` - Validated listing fields
    ///
    /// # Returns
    /// - `Ok(ServerListing)` - The created listing
    /// - `Err(AppError)` - Database error during insert
    pub async fn create(&self, param: CreateListingParam) -> Result<ServerListing, AppError> {
        insert_listing(self.db, param).await
    }

    /// Finds a listing by ID.
    ///
    /// # Returns
    /// - `Ok(Some(ServerListing))` - Listing found
    /// - `Ok(None)` - No listing with that ID
    /// - `Err(AppError)` - Database error or corrupt stored ID
    pub async fn find_by_id(&self, id: i32) -> Result<Option<ServerListing>, AppError> {
        let entity = entity::prelude::ServerListing::find_by_id(id)
            .one(self.db)
            .await?;

        entity.map(ServerListing::from_entity).transpose()
    }

    /// Finds every listing linked to a Discord guild.
    ///
    /// A guild normally has at most one listing, but nothing prevents an admin from
    /// linking a guild twice, so all matches are returned ordered by ID.
    pub async fn find_by_guild_id(&self, guild_id: u64) -> Result<Vec<ServerListing>, AppError> {
        let entities = entity::prelude::ServerListing::find()
            .filter(entity::server_listing::Column::GuildId.eq(guild_id.to_string()))
            .order_by_asc(entity::server_listing::Column::Id)
            .all(self.db)
            .await?;

        entities.into_iter().map(ServerListing::from_entity).collect()
    }

    /// Gets a page of the directory, most recently bumped first.
    ///
    /// Never-bumped listings sort after bumped ones, newest ID first.
    ///
    /// # Arguments
    /// - `param` - Zero-indexed page and page size
    ///
    /// # Returns
    /// - `Ok(PaginatedListings)` - Listings for the page with totals
    /// - `Err(AppError)` - Database error during query
    pub async fn get_paginated(
        &self,
        param: GetListingsParam,
    ) -> Result<PaginatedListings, AppError> {
        let paginator = entity::prelude::ServerListing::find()
            .order_by_with_nulls(
                entity::server_listing::Column::LastBumpAt,
                Order::Desc,
                NullOrdering::Last,
            )
            .order_by_desc(entity::server_listing::Column::Id)
            .paginate(self.db, param.per_page);

        let counts = paginator.num_items_and_pages().await?;
        let entities = paginator.fetch_page(param.page).await?;
        let listings = entities
            .into_iter()
            .map(ServerListing::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PaginatedListings {
            listings,
            total: counts.number_of_items,
            page: param.page,
            per_page: param.per_page,
            total_pages: counts.number_of_pages,
        })
    }

    /// Gets every listing owned by a Discord user, ordered by name.
    pub async fn get_by_owner(&self, owner_id: u64) -> Result<Vec<ServerListing>, AppError> {
        let entities = entity::prelude::ServerListing::find()
            .filter(entity::server_listing::Column::OwnerId.eq(owner_id.to_string()))
            .order_by_asc(entity::server_listing::Column::Name)
            .all(self.db)
            .await?;

        entities.into_iter().map(ServerListing::from_entity).collect()
    }

    /// Gets up to `limit` listings ranked by bump count.
    ///
    /// Ordered by bump count descending, ties broken by ascending ID.
    ///
    /// # Returns
    /// - `Ok(Vec<ServerListing>)` - Ranked listings, empty when `limit` is 0
    /// - `Err(AppError)` - Database error during query
    pub async fn get_leaderboard(&self, limit: u64) -> Result<Vec<ServerListing>, AppError> {
        if limit == 0 {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::ServerListing::find()
            .order_by_desc(entity::server_listing::Column::BumpCount)
            .order_by_asc(entity::server_listing::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        entities.into_iter().map(ServerListing::from_entity).collect()
    }

    /// Gets all listings with auto-update enabled, for scheduled stat refreshes.
    pub async fn get_auto_update(&self) -> Result<Vec<ServerListing>, AppError> {
        let entities = entity::prelude::ServerListing::find()
            .filter(entity::server_listing::Column::AutoUpdate.eq(true))
            .order_by_asc(entity::server_listing::Column::Id)
            .all(self.db)
            .await?;

        entities.into_iter().map(ServerListing::from_entity).collect()
    }

    /// Applies a partial update to a listing.
    ///
    /// Bump state is never touched here; it only changes through `record_bump`.
    ///
    /// # Returns
    /// - `Ok(Some(ServerListing))` - The updated listing
    /// - `Ok(None)` - No listing with that ID
    /// - `Err(AppError)` - Database error during update
    pub async fn update(
        &self,
        id: i32,
        param: UpdateListingParam,
    ) -> Result<Option<ServerListing>, AppError> {
        let Some(existing) = entity::prelude::ServerListing::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::server_listing::ActiveModel = existing.into();

        if let Some(name) = param.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(description) = param.description {
            active.description = ActiveValue::Set(description);
        }
        if let Some(invite_link) = param.invite_link {
            active.invite_link = ActiveValue::Set(invite_link);
        }
        if let Some(member_count) = param.member_count {
            active.member_count = ActiveValue::Set(member_count);
        }
        if let Some(logo_url) = param.logo_url {
            active.logo_url = ActiveValue::Set(logo_url);
        }
        if let Some(verified) = param.verified {
            active.verified = ActiveValue::Set(verified);
        }
        if let Some(tags) = param.tags {
            active.tags = ActiveValue::Set(join_tags(&tags));
        }
        if let Some(owner_id) = param.owner_id {
            active.owner_id = ActiveValue::Set(owner_id.map(|id| id.to_string()));
        }
        if let Some(guild_id) = param.guild_id {
            active.guild_id = ActiveValue::Set(guild_id.map(|id| id.to_string()));
        }
        if let Some(auto_update) = param.auto_update {
            active.auto_update = ActiveValue::Set(auto_update);
        }

        let entity = active.update(self.db).await?;

        Ok(Some(ServerListing::from_entity(entity)?))
    }

    /// Deletes a listing and, through the foreign key cascade, its bump events.
    ///
    /// # Returns
    /// - `Ok(true)` - Listing deleted
    /// - `Ok(false)` - No listing with that ID
    /// - `Err(AppError)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::ServerListing::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Conditionally records a bump on a listing.
    ///
    /// Sets `last_bump_at` and increments `bump_count` only if the stored count still
    /// equals `observed_count`. A concurrent bump that landed first changes the count, so
    /// this write affects no rows and the caller must re-read the listing.
    ///
    /// # Arguments
    /// - `id` - Listing ID
    /// - `observed_count` - Bump count read when eligibility was evaluated
    /// - `now` - Bump timestamp
    ///
    /// # Returns
    /// - `Ok(true)` - Bump written
    /// - `Ok(false)` - Listing missing or changed since it was read
    /// - `Err(AppError::InternalErr)` - `observed_count` is `i32::MAX`
    /// - `Err(AppError)` - Database error during update
    pub async fn record_bump(
        &self,
        id: i32,
        observed_count: i32,
        now: DateTime<Utc>,
    ) -> Result<bool, AppError> {
        let next_count = observed_count
            .checked_add(1)
            .ok_or(InternalError::BumpCountOverflow {
                server_id: id,
                count: observed_count,
            })?;

        let result = entity::prelude::ServerListing::update_many()
            .col_expr(
                entity::server_listing::Column::BumpCount,
                Expr::value(next_count),
            )
            .col_expr(entity::server_listing::Column::LastBumpAt, Expr::value(now))
            .filter(entity::server_listing::Column::Id.eq(id))
            .filter(entity::server_listing::Column::BumpCount.eq(observed_count))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Writes stats resolved from a listing's invite.
    ///
    /// A missing logo or guild ID in the refresh leaves the stored value unchanged.
    ///
    /// # Returns
    /// - `Ok(true)` - Listing updated
    /// - `Ok(false)` - No listing with that ID
    /// - `Err(AppError)` - Database error during update
    pub async fn refresh_stats(&self, id: i32, param: RefreshStatsParam) -> Result<bool, AppError> {
        let mut update = entity::prelude::ServerListing::update_many()
            .col_expr(
                entity::server_listing::Column::MemberCount,
                Expr::value(param.member_count),
            )
            .filter(entity::server_listing::Column::Id.eq(id));

        if let Some(logo_url) = param.logo_url {
            update = update.col_expr(entity::server_listing::Column::LogoUrl, Expr::value(logo_url));
        }
        if let Some(guild_id) = param.guild_id {
            update = update.col_expr(
                entity::server_listing::Column::GuildId,
                Expr::value(guild_id.to_string()),
            );
        }

        let result = update.exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    /// Updates the member count of every auto-updating listing linked to a guild.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of listings updated
    /// - `Err(AppError)` - Database error during update
    pub async fn update_member_count_by_guild(
        &self,
        guild_id: u64,
        member_count: i32,
    ) -> Result<u64, AppError> {
        let result = entity::prelude::ServerListing::update_many()
            .col_expr(
                entity::server_listing::Column::MemberCount,
                Expr::value(member_count),
            )
            .filter(entity::server_listing::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::server_listing::Column::AutoUpdate.eq(true))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

/// Inserts a listing through any connection, so approval can run inside a transaction.
pub(crate) async fn insert_listing<C: ConnectionTrait>(
    db: &C,
    param: CreateListingParam,
) -> Result<ServerListing, AppError> {
    let entity = entity::server_listing::ActiveModel {
        name: ActiveValue::Set(param.name),
        description: ActiveValue::Set(param.description),
        invite_link: ActiveValue::Set(param.invite_link),
        member_count: ActiveValue::Set(param.member_count),
        logo_url: ActiveValue::Set(param.logo_url),
        verified: ActiveValue::Set(param.verified),
        tags: ActiveValue::Set(join_tags(&param.tags)),
        owner_id: ActiveValue::Set(param.owner_id.map(|id| id.to_string())),
        guild_id: ActiveValue::Set(param.guild_id.map(|id| id.to_string())),
        last_bump_at: ActiveValue::Set(None),
        bump_count: ActiveValue::Set(0),
        auto_update: ActiveValue::Set(param.auto_update),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    ServerListing::from_entity(entity)
}
