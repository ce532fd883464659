//! `/stats` shows the invoking guild's listing statistics.

use chrono::{DateTime, Duration, Utc};
use sea_orm::DatabaseConnection;
use serenity::all::{Colour, CommandInteraction, CreateCommand, CreateEmbed};

use crate::server::{
    bot::command::{guild_only, not_listed, relative_time, CommandReply},
    error::AppError,
    model::{bump::CooldownStatus, listing::ServerListing},
    service::{bump::BumpService, listing::ListingService},
};

pub const NAME: &str = "stats";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Show this server's directory listing statistics")
}

pub async fn run(
    db: &DatabaseConnection,
    bump_cooldown: Duration,
    interaction: &CommandInteraction,
    now: DateTime<Utc>,
) -> Result<CommandReply, AppError> {
    let Some(guild_id) = interaction.guild_id else {
        return Ok(guild_only());
    };

    let Some(listing) = ListingService::new(db)
        .get_by_guild_id(guild_id.get())
        .await?
    else {
        return Ok(not_listed());
    };

    let status = BumpService::new(db, bump_cooldown).status_of(&listing, now);

    let mut embed = CreateEmbed::new()
        .title(&listing.name)
        .field("Members", listing.member_count.to_string(), true)
        .field("Bumps", listing.bump_count.to_string(), true)
        .field("Last bump", last_bump_text(&listing), true)
        .field("Next bump", next_bump_text(&status), true)
        .colour(Colour::BLURPLE);

    if let Some(logo_url) = &listing.logo_url {
        embed = embed.thumbnail(logo_url);
    }

    Ok(CommandReply::public(embed))
}

fn last_bump_text(listing: &ServerListing) -> String {
    match listing.last_bump_at {
        Some(at) => relative_time(at),
        None => "Never".to_string(),
    }
}

fn next_bump_text(status: &CooldownStatus) -> String {
    match status {
        CooldownStatus::Ready => "Available now".to_string(),
        CooldownStatus::CoolingDown {
            next_eligible_at, ..
        } => relative_time(*next_eligible_at),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn ready_listing_can_bump_now() {
        assert_eq!(next_bump_text(&CooldownStatus::Ready), "Available now");
    }

    #[test]
    fn cooling_down_listing_shows_relative_time() {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let status = CooldownStatus::CoolingDown {
            remaining: Duration::hours(1),
            next_eligible_at: at,
        };

        assert_eq!(next_bump_text(&status), "<t:1704110400:R>");
    }
}
