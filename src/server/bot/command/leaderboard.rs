//! `/leaderboard` lists the most bumped servers.

use chrono::Duration;
use sea_orm::DatabaseConnection;
use serenity::all::{
    Colour, CommandInteraction, CommandOptionType, CreateCommand, CreateCommandOption,
    CreateEmbed, ResolvedValue,
};

use crate::server::{
    bot::command::CommandReply, error::AppError, model::listing::ServerListing,
    service::bump::BumpService,
};

pub const NAME: &str = "leaderboard";

const DEFAULT_LIMIT: u64 = 10;
const MAX_LIMIT: u64 = 25;

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Show the most bumped servers in the directory")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::Integer,
                "limit",
                "Number of servers to show",
            )
            .min_int_value(1)
            .max_int_value(MAX_LIMIT)
            .required(false),
        )
}

pub async fn run(
    db: &DatabaseConnection,
    bump_cooldown: Duration,
    interaction: &CommandInteraction,
) -> Result<CommandReply, AppError> {
    let requested = interaction
        .data
        .options()
        .into_iter()
        .find(|option| option.name == "limit")
        .and_then(|option| match option.value {
            ResolvedValue::Integer(value) => Some(value),
            _ => None,
        });

    let listings = BumpService::new(db, bump_cooldown)
        .leaderboard(clamp_limit(requested))
        .await?;

    let embed = CreateEmbed::new()
        .title("Bump leaderboard")
        .description(format_leaderboard(&listings))
        .colour(Colour::GOLD);

    Ok(CommandReply::public(embed))
}

fn clamp_limit(requested: Option<i64>) -> u64 {
    match requested {
        Some(value) => value.clamp(1, MAX_LIMIT as i64) as u64,
        None => DEFAULT_LIMIT,
    }
}

fn format_leaderboard(listings: &[ServerListing]) -> String {
    if listings.is_empty() {
        return "No servers have been bumped yet.".to_string();
    }

    listings
        .iter()
        .enumerate()
        .map(|(index, listing)| {
            format!(
                "**{}.** {} - {} bumps",
                index + 1,
                listing.name,
                listing.bump_count
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
