use sea_orm::DatabaseConnection;
use serenity::{
    all::{Client, GatewayIntents},
    http::Http,
};
use std::sync::Arc;

use crate::server::{bot::handler::Handler, config::Config, error::AppError};

/// Builds the Discord client and returns it with its shared HTTP client.
///
/// The HTTP client is handed to the scheduler and HTTP state so every Discord API
/// call goes through the bot's rate limiter.
///
/// # Returns
/// - `Ok((Client, Arc<Http>))` - Client ready to start, and its HTTP client
/// - `Err(AppError::DiscordErr)` - Failed to build the client
pub async fn init_bot(
    config: &Config,
    db: DatabaseConnection,
) -> Result<(Client, Arc<Http>), AppError> {
    let intents = GatewayIntents::GUILDS;

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(Handler::new(db, config.bump_cooldown))
        .await?;

    let http = client.http.clone();

    Ok((client, http))
}

/// Connects to the gateway and processes events until the connection ends.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot");

    client.start().await?;

    Ok(())
}
