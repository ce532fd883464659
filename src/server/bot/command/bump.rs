//! `/bump` moves the invoking guild's listing to the top of the directory.
//!
//! The listing is resolved from the guild the command runs in. Anyone in the guild
//! may bump; the shared cooldown prevents spam.

use chrono::{DateTime, Duration, Utc};
use sea_orm::DatabaseConnection;
use serenity::all::{Colour, CommandInteraction, CreateCommand, CreateEmbed};

use crate::server::{
    bot::command::{discord_timestamp, guild_only, not_listed, relative_time, CommandReply},
    error::AppError,
    model::bump::{BumpParam, BumpResult, BumpSource},
    service::{bump::BumpService, listing::ListingService},
};

pub const NAME: &str = "bump";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Bump this server to the top of the alliance directory")
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

    let param = BumpParam {
        server_id: listing.id,
        actor_id: interaction.user.id.get().to_string(),
        source: BumpSource::Bot,
    };

    let result = BumpService::new(db, bump_cooldown).bump(param, now).await?;

    reply(&result)
}

fn reply(result: &BumpResult) -> Result<CommandReply, AppError> {
    match result {
        BumpResult::Bumped {
            bumped_at,
            next_eligible_at,
            ..
        } => {
            let embed = CreateEmbed::new()
                .title("Server bumped")
                .description(result.message())
                .field("Next bump", relative_time(*next_eligible_at), true)
                .colour(Colour::DARK_GREEN)
                .timestamp(discord_timestamp(*bumped_at)?);

            Ok(CommandReply::public(embed))
        }
        BumpResult::OnCooldown {
            next_eligible_at, ..
        } => {
            let embed = CreateEmbed::new()
                .title("On cooldown")
                .description(result.message())
                .field("Next bump", relative_time(*next_eligible_at), true)
                .colour(Colour::ORANGE);

            Ok(CommandReply {
                embed,
                ephemeral: true,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    /// Expected: Successful bumps are announced to the channel
    #[test]
    fn bumped_reply_is_public() {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let result = BumpResult::Bumped {
            listing_name: "Alpha".to_string(),
            bump_count: 6,
            bumped_at: at,
            next_eligible_at: at + Duration::hours(2),
        };

        let reply = reply(&result).unwrap();

        assert!(!reply.ephemeral);
    }

    /// Expected: Cooldown replies are only shown to the invoking user
    #[test]
    fn cooldown_reply_is_ephemeral() {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let result = BumpResult::OnCooldown {
            listing_name: "Alpha".to_string(),
            remaining: Duration::minutes(30),
            next_eligible_at: at + Duration::minutes(30),
        };

        let reply = reply(&result).unwrap();

        assert!(reply.ephemeral);
    }
}
