//! Bump event factory for creating audit records.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating bump events for an existing listing.
///
/// Defaults to a `"manual"` bump by actor `"0"` at the current time.
pub struct BumpEventFactory<'a> {
    db: &'a DatabaseConnection,
    server_id: i32,
    actor_id: String,
    bumped_at: DateTime<Utc>,
    source: String,
}

impl<'a> BumpEventFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, server_id: i32) -> Self {
        Self {
            db,
            server_id,
            actor_id: "0".to_string(),
            bumped_at: Utc::now(),
            source: "manual".to_string(),
        }
    }

    pub fn actor_id(mut self, actor_id: impl Into<String>) -> Self {
        self.actor_id = actor_id.into();
        self
    }

    pub fn bumped_at(mut self, bumped_at: DateTime<Utc>) -> Self {
        self.bumped_at = bumped_at;
        self
    }

    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    pub async fn build(self) -> Result<entity::bump_event::Model, DbErr> {
        entity::bump_event::ActiveModel {
            server_id: ActiveValue::Set(self.server_id),
            actor_id: ActiveValue::Set(self.actor_id),
            bumped_at: ActiveValue::Set(self.bumped_at),
            source: ActiveValue::Set(self.source),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a manual bump event for the listing at the given time.
pub async fn create_bump_event(
    db: &DatabaseConnection,
    server_id: i32,
    bumped_at: DateTime<Utc>,
) -> Result<entity::bump_event::Model, DbErr> {
    BumpEventFactory::new(db, server_id)
        .bumped_at(bumped_at)
        .build()
        .await
}
