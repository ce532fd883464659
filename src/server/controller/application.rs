use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        application::{ApplicationDto, SubmitApplicationDto},
    },
    server::{
        error::{auth::AuthError, AppError},
        middleware::auth::{AuthGuard, Permission},
        model::application::SubmitApplicationParam,
        service::application::ApplicationService,
        state::AppState,
    },
};

/// Tag for grouping application endpoints in OpenAPI documentation
pub static APPLICATION_TAG: &str = "application";

/// Apply to join the alliance.
///
/// The logged in Discord user becomes the representative of the application and,
/// once approved, the owner of the resulting listing.
///
/// # Access Control
/// - `LoggedIn` - Requires a Discord login
#[utoipa::path(
    post,
    path = "/api/applications",
    tag = APPLICATION_TAG,
    request_body = SubmitApplicationDto,
    responses(
        (status = 201, description = "Application submitted", body = ApplicationDto),
        (status = 400, description = "Invalid application data", body = ErrorDto),
        (status = 401, description = "Not logged in with Discord", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_application(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SubmitApplicationDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::LoggedIn])
        .await?;

    let Some(representative_id) = user.discord_id else {
        return Err(AuthError::UserNotInSession.into());
    };

    let param = SubmitApplicationParam::from_dto(representative_id, payload)?;

    let service = ApplicationService::new(&state.db);
    let application = service.submit(param).await?;

    Ok((StatusCode::CREATED, Json(application.into_dto())))
}
