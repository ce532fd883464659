//! Bump event data repository.
//!
//! Bump events form the append-only audit log of successful bumps. Events are only
//! inserted and read; they disappear only when their listing is deleted.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{
    error::AppError,
    model::bump::{BumpEvent, BumpSource},
};

pub struct BumpEventRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BumpEventRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends a bump event for a listing.
    ///
    /// # Arguments
    /// - `server_id` - Listing that was bumped
    /// - `actor_id` - Discord ID of the bumping user, or `"admin"`
    /// - `bumped_at` - Timestamp written to the listing by the same bump
    /// - `source` - Surface the bump came from
    ///
    /// # Returns
    /// - `Ok(BumpEvent)` - The recorded event
    /// - `Err(AppError)` - Database error during insert
    pub async fn create(
        &self,
        server_id: i32,
        actor_id: &str,
        bumped_at: DateTime<Utc>,
        source: BumpSource,
    ) -> Result<BumpEvent, AppError> {
        let entity = entity::bump_event::ActiveModel {
            server_id: ActiveValue::Set(server_id),
            actor_id: ActiveValue::Set(actor_id.to_string()),
            bumped_at: ActiveValue::Set(bumped_at),
            source: ActiveValue::Set(source.as_str().to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        BumpEvent::from_entity(entity)
    }

    /// Gets the most recent bump events of a listing, newest first.
    pub async fn get_recent_by_server(
        &self,
        server_id: i32,
        limit: u64,
    ) -> Result<Vec<BumpEvent>, AppError> {
        let entities = entity::prelude::BumpEvent::find()
            .filter(entity::bump_event::Column::ServerId.eq(server_id))
            .order_by_desc(entity::bump_event::Column::BumpedAt)
            .order_by_desc(entity::bump_event::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        entities.into_iter().map(BumpEvent::from_entity).collect()
    }

    /// Counts all bump events recorded for a listing.
    pub async fn count_by_server(&self, server_id: i32) -> Result<u64, AppError> {
        let count = entity::prelude::BumpEvent::find()
            .filter(entity::bump_event::Column::ServerId.eq(server_id))
            .count(self.db)
            .await?;

        Ok(count)
    }
}
