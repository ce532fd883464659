//! Application state shared across all request handlers.
//!
//! `AppState` is built once in `main` and cloned into each handler through Axum's
//! state extraction. Every field is cheap to clone: the connection pool, reqwest
//! client and OAuth client share their internals, and the Discord HTTP client is
//! behind an `Arc`.

use chrono::Duration;
use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use sea_orm::DatabaseConnection;
use serenity::http::Http;
use std::sync::Arc;

/// Type alias for the OAuth2 client configured for Discord authentication.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

#[derive(Clone)]
pub struct AppState {
    /// Connection pool shared with the bot and scheduler.
    pub db: DatabaseConnection,

    /// HTTP client for Discord API requests made on behalf of users.
    ///
    /// Built without redirect following.
    pub http_client: reqwest::Client,

    pub oauth_client: OAuth2Client,

    /// Discord HTTP client authenticated as the bot.
    pub discord_http: Arc<Http>,

    /// Shared admin password from configuration.
    pub admin_password: Arc<str>,

    /// Minimum time between two bumps of the same listing.
    pub bump_cooldown: Duration,

    /// Base URL of the web application, used for post-login redirects.
    pub app_url: String,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        oauth_client: OAuth2Client,
        discord_http: Arc<Http>,
        admin_password: String,
        bump_cooldown: Duration,
        app_url: String,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            discord_http,
            admin_password: admin_password.into(),
            bump_cooldown,
            app_url,
        }
    }
}
