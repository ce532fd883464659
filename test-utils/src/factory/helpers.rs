//! Shared helper utilities for factory methods.

use chrono::{DateTime, Utc};
use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Values are monotonically increasing across all factories in the test binary.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a listing together with one bump event per counted bump.
///
/// The listing's `bump_count` and `last_bump_at` agree with the created audit trail:
/// events are spaced one cooldown apart, ending at `last_bump_at`.
///
/// # Arguments
/// - `db` - Database connection
/// - `bumps` - Number of bump events to create
/// - `last_bump_at` - Timestamp of the most recent bump
/// - `spacing` - Time between consecutive bump events
///
/// # Returns
/// - `Ok((listing, events))` - The listing and its events, oldest first
/// - `Err(DbErr)` - Database error during creation
pub async fn create_listing_with_events(
    db: &DatabaseConnection,
    bumps: u32,
    last_bump_at: DateTime<Utc>,
    spacing: chrono::Duration,
) -> Result<
    (
        entity::server_listing::Model,
        Vec<entity::bump_event::Model>,
    ),
    DbErr,
> {
    let owner_id = next_id().to_string();
    let listing = crate::factory::server_listing::ServerListingFactory::new(db)
        .owner_id(owner_id.clone())
        .bump_count(bumps as i32)
        .last_bump_at(if bumps > 0 { Some(last_bump_at) } else { None })
        .build()
        .await?;

    let mut events = Vec::with_capacity(bumps as usize);
    for i in (0..bumps).rev() {
        let bumped_at = last_bump_at - spacing * i as i32;
        let event = crate::factory::bump_event::BumpEventFactory::new(db, listing.id)
            .actor_id(owner_id.clone())
            .bumped_at(bumped_at)
            .build()
            .await?;
        events.push(event);
    }

    Ok((listing, events))
}
