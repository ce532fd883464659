//! Slash commands.
//!
//! Each command module exposes a `register` builder and a `run` function that
//! returns a [`CommandReply`]. Sending the reply is left to the interaction handler
//! so command logic stays independent of the gateway.

use chrono::{DateTime, Duration, Utc};
use sea_orm::DatabaseConnection;
use serenity::all::{Colour, CommandInteraction, CreateCommand, CreateEmbed, Timestamp};

use crate::server::error::{internal::InternalError, AppError};

pub mod bump;
pub mod leaderboard;
pub mod stats;

/// Embed returned to the invoking user.
pub struct CommandReply {
    pub embed: CreateEmbed,
    /// Only visible to the invoking user
    pub ephemeral: bool,
}

impl CommandReply {
    pub fn public(embed: CreateEmbed) -> Self {
        Self {
            embed,
            ephemeral: false,
        }
    }

    /// Ephemeral red embed carrying `message`.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            embed: CreateEmbed::new()
                .description(message.into())
                .colour(Colour::RED),
            ephemeral: true,
        }
    }
}

/// All global slash commands registered on ready.
pub fn definitions() -> Vec<CreateCommand> {
    vec![bump::register(), stats::register(), leaderboard::register()]
}

/// Routes a command interaction to its implementation.
pub async fn run(
    db: &DatabaseConnection,
    bump_cooldown: Duration,
    interaction: &CommandInteraction,
) -> Result<CommandReply, AppError> {
    let now = Utc::now();

    match interaction.data.name.as_str() {
        bump::NAME => bump::run(db, bump_cooldown, interaction, now).await,
        stats::NAME => stats::run(db, bump_cooldown, interaction, now).await,
        leaderboard::NAME => leaderboard::run(db, bump_cooldown, interaction).await,
        other => {
            tracing::warn!("Received unknown slash command /{}", other);
            Ok(CommandReply::error("Unknown command."))
        }
    }
}

/// Reply for commands that only make sense inside a guild.
pub(super) fn guild_only() -> CommandReply {
    CommandReply::error("This command can only be used in a server.")
}

/// Reply for guilds with no linked listing.
pub(super) fn not_listed() -> CommandReply {
    CommandReply::error(
        "This server is not listed in the alliance directory. Apply for a listing on the website first.",
    )
}

/// Converts a UTC timestamp into the serenity timestamp used by embeds.
pub(super) fn discord_timestamp(at: DateTime<Utc>) -> Result<Timestamp, AppError> {
    let timestamp = at.timestamp();
    Timestamp::from_unix_timestamp(timestamp).map_err(|e| {
        InternalError::InvalidDiscordTimestamp {
            timestamp,
            reason: e.to_string(),
        }
        .into()
    })
}

/// Discord markdown that renders as a relative time, e.g. "in 2 hours".
pub(super) fn relative_time(at: DateTime<Utc>) -> String {
    format!("<t:{}:R>", at.timestamp())
}
