use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        bump::{BumpEventDto, BumpOutcomeDto, BumpStatusDto, LeaderboardEntryDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::bump::{leaderboard_into_dto, BumpParam, BumpSource},
        service::bump::BumpService,
        state::AppState,
    },
};

/// Tag for grouping bump endpoints in OpenAPI documentation
pub static BUMP_TAG: &str = "bump";

const DEFAULT_LIMIT: u64 = 10;
const MAX_LIMIT: u64 = 100;

#[derive(Deserialize)]
pub struct LimitParams {
    pub limit: Option<u64>,
}

impl LimitParams {
    /// Limit clamped to `1..=100`, defaulting to 10.
    pub fn limit(&self) -> u64 {
        self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
    }
}

/// Bump a listing.
///
/// Moves the listing to the top of the directory and increments its bump count,
/// unless it was bumped within the cooldown.
///
/// # Access Control
/// - `ListingOwner` - Owner of the listing, or an admin
///
/// # Returns
/// - `200 OK` - Bumped, with the new bump count and next eligible time
/// - `429 Too Many Requests` - On cooldown, with the next eligible time
#[utoipa::path(
    post,
    path = "/api/servers/{id}/bump",
    tag = BUMP_TAG,
    params(
        ("id" = i32, Path, description = "Listing ID")
    ),
    responses(
        (status = 200, description = "Listing bumped", body = BumpOutcomeDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the owner of this listing", body = ErrorDto),
        (status = 404, description = "Listing not found", body = ErrorDto),
        (status = 429, description = "Listing is on cooldown", body = BumpOutcomeDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn bump_server(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ListingOwner(id)])
        .await?;

    let service = BumpService::new(&state.db, state.bump_cooldown);
    let result = service
        .bump(
            BumpParam {
                server_id: id,
                actor_id: user.actor_id(),
                source: BumpSource::Manual,
            },
            Utc::now(),
        )
        .await?;

    let status = if result.is_bumped() {
        StatusCode::OK
    } else {
        StatusCode::TOO_MANY_REQUESTS
    };

    Ok((status, Json(result.into_dto())))
}

/// Get the cooldown status of a listing without bumping it.
#[utoipa::path(
    get,
    path = "/api/servers/{id}/bump",
    tag = BUMP_TAG,
    params(
        ("id" = i32, Path, description = "Listing ID")
    ),
    responses(
        (status = 200, description = "Cooldown status", body = BumpStatusDto),
        (status = 404, description = "Listing not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bump_status(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = BumpService::new(&state.db, state.bump_cooldown);

    let status = service.status(id, Utc::now()).await?;

    Ok((StatusCode::OK, Json(status.into_dto())))
}

/// Get the most recent bumps of a listing.
#[utoipa::path(
    get,
    path = "/api/servers/{id}/bumps",
    tag = BUMP_TAG,
    params(
        ("id" = i32, Path, description = "Listing ID"),
        ("limit" = Option<u64>, Query, description = "Number of events (default: 10, max: 100)")
    ),
    responses(
        (status = 200, description = "Recent bump events, newest first", body = Vec<BumpEventDto>),
        (status = 404, description = "Listing not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bump_history(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(params): Query<LimitParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = BumpService::new(&state.db, state.bump_cooldown);

    let events = service.history(id, params.limit()).await?;
    let dtos: Vec<BumpEventDto> = events.into_iter().map(|e| e.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get the bump leaderboard.
#[utoipa::path(
    get,
    path = "/api/leaderboard",
    tag = BUMP_TAG,
    params(
        ("limit" = Option<u64>, Query, description = "Number of entries (default: 10, max: 100)")
    ),
    responses(
        (status = 200, description = "Listings ranked by bump count", body = Vec<LeaderboardEntryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_leaderboard(
    State(state): State<AppState>,
    Query(params): Query<LimitParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = BumpService::new(&state.db, state.bump_cooldown);

    let listings = service.leaderboard(params.limit()).await?;

    Ok((StatusCode::OK, Json(leaderboard_into_dto(listings))))
}
