use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        user::{AdminLoginDto, SessionUserDto},
    },
    server::{
        error::{auth::AuthError, AppError},
        middleware::{
            auth::{AuthGuard, Permission},
            session::{AuthSession, CsrfSession},
        },
        service::auth::{verify_admin_password, AuthService},
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Query parameters for the OAuth callback endpoint.
#[derive(Deserialize)]
pub struct CallbackParams {
    /// CSRF state token to be validated against the session value.
    pub state: String,
    /// Authorization code from Discord for token exchange.
    pub code: String,
}

/// Start Discord OAuth2 login.
///
/// Stores a CSRF token in the session and redirects to Discord's consent screen.
#[utoipa::path(
    get,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Redirect to Discord OAuth2"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(&state.http_client, &state.oauth_client);

    let (url, csrf_token) = auth_service.login_url();

    CsrfSession::new(&session)
        .set_token(csrf_token.secret().clone())
        .await?;

    Ok(Redirect::temporary(url.as_str()))
}

/// Complete Discord OAuth2 login.
///
/// Validates the CSRF state, exchanges the code and stores the Discord user in
/// the session before redirecting to the application.
#[utoipa::path(
    get,
    path = "/api/auth/callback",
    tag = AUTH_TAG,
    params(
        ("state" = String, Query, description = "CSRF state"),
        ("code" = String, Query, description = "OAuth2 authorization code")
    ),
    responses(
        (status = 307, description = "Logged in, redirect to the application"),
        (status = 400, description = "CSRF mismatch or code exchange failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<CallbackParams>,
) -> Result<impl IntoResponse, AppError> {
    validate_csrf(&session, &params.state).await?;

    let auth_service = AuthService::new(&state.http_client, &state.oauth_client);
    let identity = auth_service.callback(params.code).await?;

    AuthSession::new(&session)
        .set_user(identity.id, identity.name)
        .await?;

    Ok(Redirect::temporary(&state.app_url))
}

/// Log out, clearing the session.
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged out", body = SuccessDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok((
        StatusCode::OK,
        Json(SuccessDto {
            message: "Logged out".to_string(),
        }),
    ))
}

/// Get the identity stored in the current session.
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current session user", body = SessionUserDto),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::LoggedIn])
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Log in as admin with the shared password.
///
/// Sets the admin flag on the session. An existing Discord login is kept, so bumps
/// made by the admin are still attributed to their Discord account.
#[utoipa::path(
    post,
    path = "/api/admin/login",
    tag = AUTH_TAG,
    request_body = AdminLoginDto,
    responses(
        (status = 200, description = "Admin session established", body = SuccessDto),
        (status = 401, description = "Invalid password", body = ErrorDto)
    ),
)]
pub async fn admin_login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<AdminLoginDto>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(e) = verify_admin_password(&state.admin_password, &payload.password) {
        tracing::warn!("Rejected admin login attempt");
        return Err(e.into());
    }

    AuthSession::new(&session).set_admin(true).await?;
    tracing::info!("Admin session established");

    Ok((
        StatusCode::OK,
        Json(SuccessDto {
            message: "Logged in as admin".to_string(),
        }),
    ))
}

async fn validate_csrf(session: &Session, csrf_state: &str) -> Result<(), AppError> {
    let stored_state = CsrfSession::new(session).take_token().await?;

    match stored_state {
        Some(state) if state == csrf_state => Ok(()),
        _ => Err(AppError::AuthErr(AuthError::CsrfValidationFailed)),
    }
}
