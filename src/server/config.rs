use chrono::Duration;

use crate::server::{
    error::{config::ConfigError, AppError},
    model::bump::DEFAULT_BUMP_COOLDOWN_MINUTES,
};

const DISCORD_AUTH_URL: &str = "https://discord.com/oauth2/authorize";
const DISCORD_TOKEN_URL: &str = "https://discord.com/api/oauth2/token";

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_APP_URL: &str = "http://localhost:8080";
/// One week.
const MAX_BUMP_COOLDOWN_MINUTES: i64 = 7 * 24 * 60;

pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    pub app_url: String,

    pub discord_client_id: String,
    pub discord_client_secret: String,
    pub discord_redirect_url: String,
    pub discord_bot_token: String,

    pub discord_auth_url: String,
    pub discord_token_url: String,

    /// Shared password granting admin access to the panel.
    pub admin_password: String,
    /// Minimum time between two bumps of the same listing.
    pub bump_cooldown: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            bind_address: optional("BIND_ADDRESS", DEFAULT_BIND_ADDRESS),
            app_url: optional("APP_URL", DEFAULT_APP_URL),
            discord_client_id: required("DISCORD_CLIENT_ID")?,
            discord_client_secret: required("DISCORD_CLIENT_SECRET")?,
            discord_redirect_url: required("DISCORD_REDIRECT_URL")?,
            discord_bot_token: required("DISCORD_BOT_TOKEN")?,
            discord_auth_url: DISCORD_AUTH_URL.to_string(),
            discord_token_url: DISCORD_TOKEN_URL.to_string(),
            admin_password: required("ADMIN_PASSWORD")?,
            bump_cooldown: bump_cooldown_from(std::env::var("BUMP_COOLDOWN_MINUTES").ok())?,
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Parses the bump cooldown in minutes, defaulting to two hours.
///
/// The cooldown must lie in `1..=10080` minutes (one week).
fn bump_cooldown_from(value: Option<String>) -> Result<Duration, ConfigError> {
    let Some(value) = value else {
        return Ok(Duration::minutes(DEFAULT_BUMP_COOLDOWN_MINUTES));
    };

    let minutes = value
        .trim()
        .parse::<i64>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: "BUMP_COOLDOWN_MINUTES".to_string(),
            reason: e.to_string(),
        })?;

    let out_of_range = || ConfigError::InvalidEnvVar {
        name: "BUMP_COOLDOWN_MINUTES".to_string(),
        reason: format!(
            "must be between 1 and {} minutes",
            MAX_BUMP_COOLDOWN_MINUTES
        ),
    };

    if !(1..=MAX_BUMP_COOLDOWN_MINUTES).contains(&minutes) {
        return Err(out_of_range());
    }

    Duration::try_minutes(minutes).ok_or_else(out_of_range)
}
