//! Discord companion bot.
//!
//! The bot mirrors the directory's bump, stats and leaderboard features as global
//! slash commands and keeps member counts of auto-updating listings in step with
//! the gateway. It runs in its own tokio task next to the HTTP server and shares
//! the database pool and the bump service with it.
//!
//! # Gateway Intents
//!
//! Only `GUILDS` is required: slash command interactions are delivered regardless
//! of intents, and `guild_create` carries the member count.

pub mod command;
pub mod handler;
pub mod start;
