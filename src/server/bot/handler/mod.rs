use chrono::Duration;
use sea_orm::DatabaseConnection;
use serenity::all::{Context, EventHandler, Guild, Interaction, Ready};
use serenity::async_trait;

pub mod guild;
pub mod interaction;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub db: DatabaseConnection,
    pub bump_cooldown: Duration,
}

impl Handler {
    pub fn new(db: DatabaseConnection, bump_cooldown: Duration) -> Self {
        Self { db, bump_cooldown }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready).await;
    }

    /// Called when a guild becomes available or the bot joins a new guild
    async fn guild_create(&self, ctx: Context, guild: Guild, is_new: Option<bool>) {
        guild::handle_guild_create(&self.db, ctx, guild, is_new).await;
    }

    /// Called when a user invokes one of the bot's slash commands
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction_create(&self.db, self.bump_cooldown, ctx, interaction)
            .await;
    }
}
