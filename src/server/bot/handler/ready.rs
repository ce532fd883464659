//! Ready event handler.
//!
//! Fired once per gateway connection. Registers the global slash commands, which
//! Discord treats as an overwrite, so repeated registration is harmless.

use serenity::all::{ActivityData, Command, Context, Ready};

use crate::server::bot::command;

pub async fn handle_ready(ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    ctx.set_activity(Some(ActivityData::custom("Use /bump to bump your server")));

    match Command::set_global_commands(&ctx.http, command::definitions()).await {
        Ok(commands) => tracing::info!("Registered {} slash commands", commands.len()),
        Err(e) => tracing::error!("Failed to register slash commands: {}", e),
    }
}
