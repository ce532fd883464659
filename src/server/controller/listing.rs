use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        listing::{OwnerListingUpdateDto, PaginatedServerListingsDto, ServerListingDto},
    },
    server::{
        controller::PaginationParams,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::listing::{GetListingsParam, UpdateListingParam},
        service::listing::ListingService,
        state::AppState,
    },
};

/// Tag for grouping listing endpoints in OpenAPI documentation
pub static LISTING_TAG: &str = "listing";

/// Get the public server directory.
///
/// Returns listings most recently bumped first; never-bumped listings come last.
#[utoipa::path(
    get,
    path = "/api/servers",
    tag = LISTING_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)")
    ),
    responses(
        (status = 200, description = "Page of server listings", body = PaginatedServerListingsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_servers(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = ListingService::new(&state.db);

    let listings = service
        .get_paginated(GetListingsParam {
            page: params.page,
            per_page: params.per_page(),
        })
        .await?;

    Ok((StatusCode::OK, Json(listings.into_dto())))
}

/// Get a single server listing.
#[utoipa::path(
    get,
    path = "/api/servers/{id}",
    tag = LISTING_TAG,
    params(
        ("id" = i32, Path, description = "Listing ID")
    ),
    responses(
        (status = 200, description = "Server listing", body = ServerListingDto),
        (status = 404, description = "Listing not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_server(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ListingService::new(&state.db);

    let listing = service.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(listing.into_dto())))
}

/// Edit a listing as its owner.
///
/// Owners may change description, invite, logo, tags and the auto-update flag.
/// Absent fields are left unchanged.
///
/// # Access Control
/// - `ListingOwner` - Owner of the listing, or an admin
#[utoipa::path(
    patch,
    path = "/api/servers/{id}",
    tag = LISTING_TAG,
    params(
        ("id" = i32, Path, description = "Listing ID")
    ),
    request_body = OwnerListingUpdateDto,
    responses(
        (status = 200, description = "Updated listing", body = ServerListingDto),
        (status = 400, description = "Invalid listing data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the owner of this listing", body = ErrorDto),
        (status = 404, description = "Listing not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_server(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<OwnerListingUpdateDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ListingOwner(id)])
        .await?;

    let param = UpdateListingParam::from_owner_dto(payload)?;

    let service = ListingService::new(&state.db);
    let listing = service.update(id, param).await?;

    Ok((StatusCode::OK, Json(listing.into_dto())))
}

/// Get the listings owned by the logged in user.
#[utoipa::path(
    get,
    path = "/api/user/servers",
    tag = LISTING_TAG,
    responses(
        (status = 200, description = "Listings owned by the user", body = Vec<ServerListingDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_servers(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::LoggedIn])
        .await?;

    let listings = match user.discord_id {
        Some(discord_id) => {
            ListingService::new(&state.db)
                .get_by_owner(discord_id)
                .await?
        }
        None => Vec::new(),
    };

    let dtos: Vec<ServerListingDto> = listings.into_iter().map(|l| l.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
