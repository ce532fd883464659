//! Authentication service for Discord OAuth2 and the shared admin password.

use oauth2::{
    basic::BasicTokenType, AuthorizationCode, CsrfToken, EmptyExtraTokenFields, Scope,
    StandardTokenResponse, TokenResponse,
};
use serenity::all::User as DiscordUser;
use url::Url;

use crate::server::{
    error::{auth::AuthError, AppError},
    state::OAuth2Client,
};

const DISCORD_USER_URL: &str = "https://discord.com/api/users/@me";

/// Discord identity resolved at the end of the OAuth flow.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscordIdentity {
    pub id: u64,
    pub name: String,
}

/// Service for Discord OAuth2 login.
///
/// Listing owners sign in with Discord; no user table is kept, the identity lives in
/// the session and is matched against listing owner IDs.
pub struct AuthService<'a> {
    pub http_client: &'a reqwest::Client,
    pub oauth_client: &'a OAuth2Client,
}

impl<'a> AuthService<'a> {
    pub fn new(http_client: &'a reqwest::Client, oauth_client: &'a OAuth2Client) -> Self {
        Self {
            http_client,
            oauth_client,
        }
    }

    /// Generates a Discord OAuth2 login URL with CSRF protection.
    ///
    /// # Returns
    /// - `(Url, CsrfToken)` - Authorization URL and the CSRF state to store in session
    pub fn login_url(&self) -> (Url, CsrfToken) {
        let (authorize_url, csrf_state) = self
            .oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("identify".to_string()))
            .url();

        (authorize_url, csrf_state)
    }

    /// Exchanges the authorization code and fetches the Discord user.
    ///
    /// # Returns
    /// - `Ok(DiscordIdentity)` - The authenticated Discord user
    /// - `Err(AuthError::TokenExchangeFailed)` - Code exchange rejected
    /// - `Err(AppError::ReqwestErr)` - Failed to fetch the user from Discord
    pub async fn callback(&self, authorization_code: String) -> Result<DiscordIdentity, AppError> {
        let token = self
            .oauth_client
            .exchange_code(AuthorizationCode::new(authorization_code))
            .request_async(self.http_client)
            .await
            .map_err(|e| AuthError::TokenExchangeFailed(e.to_string()))?;

        let user = self.fetch_discord_user(&token).await?;
        tracing::info!("User {} ({}) logged in", user.name, user.id);

        Ok(DiscordIdentity {
            id: user.id.get(),
            name: user.global_name.unwrap_or(user.name),
        })
    }

    async fn fetch_discord_user(
        &self,
        token: &StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    ) -> Result<DiscordUser, AppError> {
        let access_token = token.access_token().secret();

        let user = self
            .http_client
            .get(DISCORD_USER_URL)
            .bearer_auth(access_token)
            .send()
            .await?
            .error_for_status()?
            .json::<DiscordUser>()
            .await?;

        Ok(user)
    }
}

/// Checks a submitted admin password against the configured one.
///
/// Compares every byte regardless of where the first mismatch is.
///
/// # Returns
/// - `Ok(())` - Passwords match
/// - `Err(AuthError::InvalidAdminPassword)` - Mismatch or empty configured password
pub fn verify_admin_password(expected: &str, submitted: &str) -> Result<(), AuthError> {
    let expected = expected.as_bytes();
    let submitted = submitted.as_bytes();

    let mut diff = expected.len() ^ submitted.len();
    for (i, byte) in expected.iter().enumerate() {
        diff |= (byte ^ submitted.get(i).copied().unwrap_or(0)) as usize;
    }

    if expected.is_empty() || diff != 0 {
        return Err(AuthError::InvalidAdminPassword);
    }

    Ok(())
}
