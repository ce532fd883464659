use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No Discord user or admin flag is stored in the session.
    #[error("No user found in session")]
    UserNotInSession,

    /// The session user lacks the permission required for the request.
    ///
    /// # Fields
    /// - Discord ID of the session user, if any
    /// - Description of the denied action for server-side logs
    #[error("User {0:?} denied access: {1}")]
    AccessDenied(Option<u64>, String),

    /// The submitted shared admin password did not match.
    #[error("Invalid admin password")]
    InvalidAdminPassword,

    /// CSRF state validation failed during OAuth callback.
    ///
    /// The CSRF state token in the OAuth callback URL does not match the token stored
    /// in the session, indicating a potential CSRF attack or an invalid callback request.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// Exchanging the OAuth authorization code for a token failed.
    #[error("Failed to exchange OAuth authorization code: {0}")]
    TokenExchangeFailed(String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` / `InvalidAdminPassword` → 401 Unauthorized
/// - `AccessDenied` → 403 Forbidden
/// - `CsrfValidationFailed` / `TokenExchangeFailed` → 400 Bad Request
///
/// Details are logged at debug level; client-facing messages stay generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::UserNotInSession => (StatusCode::UNAUTHORIZED, "You must be logged in"),
            Self::InvalidAdminPassword => (StatusCode::UNAUTHORIZED, "Invalid password"),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                "You do not have permission to perform this action",
            ),
            Self::CsrfValidationFailed | Self::TokenExchangeFailed(_) => (
                StatusCode::BAD_REQUEST,
                "There was an issue logging you in, please try again.",
            ),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
