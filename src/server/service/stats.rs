//! Listing stat refresh from Discord invites.
//!
//! Auto-updating listings follow their Discord server: member count, icon and guild
//! ID are resolved from the listing's invite through the Discord API.

use sea_orm::DatabaseConnection;
use serenity::{all::Invite, http::Http};
use std::sync::Arc;

use crate::server::{
    data::server_listing::ServerListingRepository,
    error::AppError,
    model::listing::{RefreshStatsParam, ServerListing},
    util::invite::parse_invite_code,
};

/// Outcome of refreshing every auto-updating listing.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RefreshSummary {
    pub updated: usize,
    pub skipped: usize,
    pub failed: usize,
}

pub struct StatsService<'a> {
    db: &'a DatabaseConnection,
    http: Arc<Http>,
}

impl<'a> StatsService<'a> {
    pub fn new(db: &'a DatabaseConnection, http: Arc<Http>) -> Self {
        Self { db, http }
    }

    /// Refreshes stats of every listing with auto-update enabled.
    ///
    /// Failures are logged per listing and do not stop the remaining refreshes.
    pub async fn refresh_all(&self) -> Result<RefreshSummary, AppError> {
        let repo = ServerListingRepository::new(self.db);
        let listings = repo.get_auto_update().await?;

        let mut summary = RefreshSummary::default();
        for listing in listings {
            match self.refresh_listing(&listing).await {
                Ok(true) => summary.updated += 1,
                Ok(false) => summary.skipped += 1,
                Err(e) => {
                    summary.failed += 1;
                    tracing::warn!("Failed to refresh stats of listing {}: {}", listing.id, e);
                }
            }
        }

        Ok(summary)
    }

    /// Refreshes one listing from its invite.
    ///
    /// # Returns
    /// - `Ok(true)` - Stats written
    /// - `Ok(false)` - Invite link has no usable code or the invite carries no counts
    /// - `Err(AppError)` - Discord API or database error
    pub async fn refresh_listing(&self, listing: &ServerListing) -> Result<bool, AppError> {
        let Some(code) = parse_invite_code(&listing.invite_link) else {
            tracing::debug!(
                "Listing {} has no parseable invite code in {}",
                listing.id,
                listing.invite_link
            );
            return Ok(false);
        };

        let invite = self.http.get_invite(&code, true, false, None).await?;

        let Some(param) = stats_from_invite(&invite) else {
            return Ok(false);
        };

        let repo = ServerListingRepository::new(self.db);
        repo.refresh_stats(listing.id, param).await
    }
}

/// Extracts refreshable stats from an invite fetched with counts.
fn stats_from_invite(invite: &Invite) -> Option<RefreshStatsParam> {
    let guild = invite.guild.as_ref();

    refresh_param(
        invite.approximate_member_count,
        guild.map(|g| g.id.get()),
        guild.and_then(|g| g.icon.as_ref()).map(|icon| icon.to_string()),
    )
}

fn refresh_param(
    member_count: Option<u64>,
    guild_id: Option<u64>,
    icon_hash: Option<String>,
) -> Option<RefreshStatsParam> {
    let member_count = member_count?;

    Some(RefreshStatsParam {
        member_count: i32::try_from(member_count).unwrap_or(i32::MAX),
        logo_url: guild_id
            .zip(icon_hash)
            .map(|(id, hash)| guild_icon_url(id, &hash)),
        guild_id,
    })
}

/// CDN URL of a guild icon; animated icons (hash prefixed `a_`) are served as GIF.
pub fn guild_icon_url(guild_id: u64, icon_hash: &str) -> String {
    let extension = if icon_hash.starts_with("a_") {
        "gif"
    } else {
        "png"
    };

    format!(
        "https://cdn.discordapp.com/icons/{}/{}.{}",
        guild_id, icon_hash, extension
    )
}
