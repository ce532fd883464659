//! Request authorization against the session.
//!
//! `AuthGuard` resolves the session identity and checks it against a list of
//! required permissions. Controllers call it before touching any service.

use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::server_listing::ServerListingRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::SessionUser,
};

/// Permission a request can require.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    /// Any Discord login or admin session.
    LoggedIn,
    /// Admin flag set through the shared admin password.
    Admin,
    /// Owner of the given listing. Admins always pass.
    ListingOwner(i32),
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the session user and verifies every permission.
    ///
    /// # Returns
    /// - `Ok(SessionUser)` - The session identity, all permissions granted
    /// - `Err(AuthError::UserNotInSession)` - No Discord login and no admin flag
    /// - `Err(AuthError::AccessDenied)` - A permission was not granted
    /// - `Err(AppError::NotFound)` - `ListingOwner` names a listing that does not exist
    pub async fn require(&self, permissions: &[Permission]) -> Result<SessionUser, AppError> {
        let auth_session = AuthSession::new(self.session);

        let discord_id = auth_session.get_user_id().await?;
        let admin = auth_session.is_admin().await?;

        if discord_id.is_none() && !admin {
            return Err(AuthError::UserNotInSession.into());
        }

        let user = SessionUser {
            discord_id,
            name: auth_session.get_user_name().await?,
            admin,
        };

        for permission in permissions {
            match permission {
                Permission::LoggedIn => {}
                Permission::Admin => {
                    if !user.admin {
                        return Err(AuthError::AccessDenied(
                            user.discord_id,
                            "User attempted an admin action without admin access".to_string(),
                        )
                        .into());
                    }
                }
                Permission::ListingOwner(listing_id) => {
                    self.require_listing_owner(&user, *listing_id).await?;
                }
            }
        }

        Ok(user)
    }

    async fn require_listing_owner(
        &self,
        user: &SessionUser,
        listing_id: i32,
    ) -> Result<(), AppError> {
        let repo = ServerListingRepository::new(self.db);

        let listing = repo
            .find_by_id(listing_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Server {} not found", listing_id)))?;

        if user.admin {
            return Ok(());
        }

        match user.discord_id {
            Some(discord_id) if listing.is_owned_by(discord_id) => Ok(()),
            _ => Err(AuthError::AccessDenied(
                user.discord_id,
                format!("User attempted to manage listing {} they do not own", listing_id),
            )
            .into()),
        }
    }
}
