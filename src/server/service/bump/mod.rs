//! Bump service: cooldown checks, bump recording and the leaderboard.
//!
//! This is the single place bump rules live. The HTTP bump endpoint and the bot's
//! `/bump` command both call `BumpService::bump`, so eligibility, the counter
//! increment and the audit record behave the same on every surface.

pub mod cooldown;

#[cfg(test)]
mod test;

use chrono::{DateTime, Duration, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{bump_event::BumpEventRepository, server_listing::ServerListingRepository},
    error::{internal::InternalError, AppError},
    model::{
        bump::{BumpEvent, BumpParam, BumpResult, CooldownStatus},
        listing::ServerListing,
    },
    service::bump::cooldown::{eligible_after, evaluate_cooldown},
};

/// Conditional writes attempted before a bump gives up under contention.
const MAX_BUMP_ATTEMPTS: usize = 3;

pub struct BumpService<'a> {
    db: &'a DatabaseConnection,
    cooldown: Duration,
}

impl<'a> BumpService<'a> {
    /// Creates a new BumpService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `cooldown` - Minimum time between two bumps of the same listing
    pub fn new(db: &'a DatabaseConnection, cooldown: Duration) -> Self {
        Self { db, cooldown }
    }

    /// Bumps a listing if its cooldown has expired.
    ///
    /// Reads the listing, evaluates the cooldown at `now` and, when allowed, writes
    /// `last_bump_at = now` and `bump_count + 1` conditionally on the count that was
    /// read. If a concurrent bump wins that write, the listing is re-read and
    /// re-evaluated, which normally reports the new cooldown. A successful write is
    /// followed by appending one bump event; failure to append is logged and the bump
    /// still succeeds.
    ///
    /// # Arguments
    /// - `param` - Listing, actor and source of the bump
    /// - `now` - Current time
    ///
    /// # Returns
    /// - `Ok(BumpResult::Bumped)` - Bump recorded with the new count
    /// - `Ok(BumpResult::OnCooldown)` - Not eligible yet, nothing written
    /// - `Err(AppError::NotFound)` - Listing does not exist
    /// - `Err(AppError::DbErr)` - Listing update failed
    pub async fn bump(&self, param: BumpParam, now: DateTime<Utc>) -> Result<BumpResult, AppError> {
        let listing_repo = ServerListingRepository::new(self.db);

        for attempt in 1..=MAX_BUMP_ATTEMPTS {
            let listing = self.get_listing(param.server_id).await?;

            if let CooldownStatus::CoolingDown {
                remaining,
                next_eligible_at,
            } = evaluate_cooldown(listing.last_bump_at, self.cooldown, now)
            {
                return Ok(BumpResult::OnCooldown {
                    listing_name: listing.name,
                    remaining,
                    next_eligible_at,
                });
            }

            let written = listing_repo
                .record_bump(listing.id, listing.bump_count, now)
                .await?;

            if !written {
                tracing::debug!(
                    "Bump of listing {} lost conditional write (attempt {})",
                    listing.id,
                    attempt
                );
                continue;
            }

            self.append_audit(&param, now).await;

            let bump_count = listing.bump_count + 1;
            tracing::info!(
                "Listing {} bumped by {} via {} (total {})",
                listing.id,
                param.actor_id,
                param.source,
                bump_count
            );

            return Ok(BumpResult::Bumped {
                listing_name: listing.name,
                bump_count,
                bumped_at: now,
                next_eligible_at: eligible_after(now, self.cooldown),
            });
        }

        Err(InternalError::BumpContention {
            server_id: param.server_id,
            attempts: MAX_BUMP_ATTEMPTS,
        }
        .into())
    }

    /// Evaluates a listing's cooldown without writing anything.
    ///
    /// # Returns
    /// - `Ok(CooldownStatus)` - Cooldown status at `now`
    /// - `Err(AppError::NotFound)` - Listing does not exist
    pub async fn status(
        &self,
        server_id: i32,
        now: DateTime<Utc>,
    ) -> Result<CooldownStatus, AppError> {
        let listing = self.get_listing(server_id).await?;

        Ok(self.status_of(&listing, now))
    }

    /// Evaluates the cooldown of an already loaded listing.
    pub fn status_of(&self, listing: &ServerListing, now: DateTime<Utc>) -> CooldownStatus {
        evaluate_cooldown(listing.last_bump_at, self.cooldown, now)
    }

    /// Gets up to `limit` listings ranked by bump count, highest first.
    ///
    /// Ties keep storage order. A limit of 0 yields an empty leaderboard.
    pub async fn leaderboard(&self, limit: u64) -> Result<Vec<ServerListing>, AppError> {
        let repo = ServerListingRepository::new(self.db);

        repo.get_leaderboard(limit).await
    }

    /// Gets the most recent bump events of a listing, newest first.
    ///
    /// # Returns
    /// - `Ok(Vec<BumpEvent>)` - Up to `limit` events
    /// - `Err(AppError::NotFound)` - Listing does not exist
    pub async fn history(&self, server_id: i32, limit: u64) -> Result<Vec<BumpEvent>, AppError> {
        self.get_listing(server_id).await?;

        let repo = BumpEventRepository::new(self.db);

        repo.get_recent_by_server(server_id, limit).await
    }

    async fn get_listing(&self, server_id: i32) -> Result<ServerListing, AppError> {
        let repo = ServerListingRepository::new(self.db);

        repo.find_by_id(server_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Server {} not found", server_id)))
    }

    async fn append_audit(&self, param: &BumpParam, now: DateTime<Utc>) {
        let repo = BumpEventRepository::new(self.db);

        if let Err(e) = repo
            .create(param.server_id, &param.actor_id, now, param.source)
            .await
        {
            tracing::error!(
                "Listing {} was bumped but its bump event could not be recorded: {}",
                param.server_id,
                e
            );
        }
    }
}
