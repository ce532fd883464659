//! Type-safe session management wrappers.
//!
//! Each struct wraps the same underlying `Session` but exposes only the keys of one
//! concern, so key names and value types live in one place.
//!
//! - `AuthSession` - Discord login and admin flag
//! - `CsrfSession` - CSRF token for the OAuth flow

use tower_sessions::Session;

use crate::server::{error::AppError, util::parse::parse_u64_from_string};

const SESSION_AUTH_USER_ID: &str = "auth:user";
const SESSION_AUTH_USER_NAME: &str = "auth:user_name";
const SESSION_AUTH_ADMIN: &str = "auth:admin";
const SESSION_AUTH_CSRF_TOKEN: &str = "auth:csrf_token";

/// Authentication session management.
///
/// Stores the Discord identity set after OAuth login and the admin flag set after
/// a successful admin password login. Either may be present without the other.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the Discord user after a successful OAuth callback.
    ///
    /// # Returns
    /// - `Ok(())` - User stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_user(&self, user_id: u64, name: String) -> Result<(), AppError> {
        self.session
            .insert(SESSION_AUTH_USER_ID, user_id.to_string())
            .await?;
        self.session.insert(SESSION_AUTH_USER_NAME, name).await?;
        Ok(())
    }

    /// Retrieves the Discord ID of the logged in user.
    ///
    /// # Returns
    /// - `Ok(Some(user_id))` - User is logged in
    /// - `Ok(None)` - No Discord user in session
    /// - `Err(AppError)` - Failed to access session or stored ID is corrupt
    pub async fn get_user_id(&self) -> Result<Option<u64>, AppError> {
        let Some(user_id_str) = self.session.get::<String>(SESSION_AUTH_USER_ID).await? else {
            return Ok(None);
        };

        let user_id = parse_u64_from_string(user_id_str)?;

        Ok(Some(user_id))
    }

    pub async fn get_user_name(&self) -> Result<Option<String>, AppError> {
        Ok(self.session.get::<String>(SESSION_AUTH_USER_NAME).await?)
    }

    /// Marks the session as admin after the shared password was verified.
    pub async fn set_admin(&self, admin: bool) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_ADMIN, admin).await?;
        Ok(())
    }

    pub async fn is_admin(&self) -> Result<bool, AppError> {
        Ok(self
            .session
            .get::<bool>(SESSION_AUTH_ADMIN)
            .await?
            .unwrap_or(false))
    }

    /// Clears all data from the session on logout.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}

/// CSRF protection session management.
///
/// The token is stored when the OAuth login starts and taken during the callback,
/// so each token validates at most one callback.
pub struct CsrfSession<'a> {
    session: &'a Session,
}

impl<'a> CsrfSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores a CSRF token in the session.
    pub async fn set_token(&self, token: String) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_CSRF_TOKEN, token).await?;
        Ok(())
    }

    /// Retrieves and removes the CSRF token from the session.
    ///
    /// # Returns
    /// - `Ok(Some(token))` - Token found and removed
    /// - `Ok(None)` - No token in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn take_token(&self) -> Result<Option<String>, AppError> {
        let token = self.session.remove(SESSION_AUTH_CSRF_TOKEN).await?;
        Ok(token)
    }
}
