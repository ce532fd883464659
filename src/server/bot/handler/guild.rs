//! Guild event handler.
//!
//! `guild_create` fires for every guild on startup and when the bot joins a guild.
//! Listings linked to the guild with auto-update enabled take the gateway's member
//! count, which is fresher than the hourly invite refresh.

use sea_orm::DatabaseConnection;
use serenity::all::{Context, Guild};

use crate::server::service::listing::ListingService;

pub async fn handle_guild_create(
    db: &DatabaseConnection,
    _ctx: Context,
    guild: Guild,
    _is_new: Option<bool>,
) {
    let guild_id = guild.id.get();

    tracing::debug!(
        "Guild create event: {} ({}) - member_count: {}",
        guild.name,
        guild_id,
        guild.member_count
    );

    let service = ListingService::new(db);
    match service
        .sync_guild_member_count(guild_id, guild.member_count)
        .await
    {
        Ok(0) => {}
        Ok(updated) => tracing::info!(
            "Updated member count of {} listing(s) for guild {} to {}",
            updated,
            guild_id,
            guild.member_count
        ),
        Err(e) => tracing::error!("Failed to sync member count for guild {}: {}", guild_id, e),
    }
}
