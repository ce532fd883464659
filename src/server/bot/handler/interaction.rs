//! Slash command dispatch.

use chrono::Duration;
use sea_orm::DatabaseConnection;
use serenity::all::{
    CommandInteraction, Context, CreateInteractionResponse, CreateInteractionResponseMessage,
    Interaction,
};

use crate::server::bot::command::{self, CommandReply};

pub async fn handle_interaction_create(
    db: &DatabaseConnection,
    bump_cooldown: Duration,
    ctx: Context,
    interaction: Interaction,
) {
    let Interaction::Command(interaction) = interaction else {
        return;
    };

    let reply = match command::run(db, bump_cooldown, &interaction).await {
        Ok(reply) => reply,
        Err(e) => {
            tracing::error!(
                "Failed to run /{} for user {}: {}",
                interaction.data.name,
                interaction.user.id,
                e
            );
            CommandReply::error("Something went wrong, please try again later.")
        }
    };

    if let Err(e) = respond(&ctx, &interaction, reply).await {
        tracing::error!(
            "Failed to respond to /{} interaction: {}",
            interaction.data.name,
            e
        );
    }
}

async fn respond(
    ctx: &Context,
    interaction: &CommandInteraction,
    reply: CommandReply,
) -> Result<(), serenity::Error> {
    let message = CreateInteractionResponseMessage::new()
        .embed(reply.embed)
        .ephemeral(reply.ephemeral);

    interaction
        .create_response(&ctx.http, CreateInteractionResponse::Message(message))
        .await
}
