use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        application::PaginatedApplicationsDto,
        listing::{AdminListingDto, ServerListingDto},
    },
    server::{
        controller::PaginationParams,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            application::GetApplicationsParam,
            listing::{CreateListingParam, UpdateListingParam},
        },
        service::{application::ApplicationService, listing::ListingService},
        state::AppState,
    },
};

/// Tag for grouping admin endpoints in OpenAPI documentation
pub static ADMIN_TAG: &str = "admin";

/// Get pending applications.
///
/// # Access Control
/// - `Admin` - Only admins can review applications
#[utoipa::path(
    get,
    path = "/api/admin/applications",
    tag = ADMIN_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)")
    ),
    responses(
        (status = 200, description = "Page of pending applications", body = PaginatedApplicationsDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_applications(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = ApplicationService::new(&state.db);
    let applications = service
        .get_paginated(GetApplicationsParam {
            page: params.page,
            per_page: params.per_page(),
        })
        .await?;

    Ok((StatusCode::OK, Json(applications.into_dto())))
}

/// Approve an application, converting it into a listing.
///
/// # Access Control
/// - `Admin` - Only admins can review applications
#[utoipa::path(
    post,
    path = "/api/admin/applications/{id}/approve",
    tag = ADMIN_TAG,
    params(
        ("id" = i32, Path, description = "Application ID")
    ),
    responses(
        (status = 201, description = "Listing created from the application", body = ServerListingDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Application not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn approve_application(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = ApplicationService::new(&state.db);
    let listing = service.approve(id).await?;

    Ok((StatusCode::CREATED, Json(listing.into_dto())))
}

/// Reject an application, discarding it.
///
/// # Access Control
/// - `Admin` - Only admins can review applications
#[utoipa::path(
    post,
    path = "/api/admin/applications/{id}/reject",
    tag = ADMIN_TAG,
    params(
        ("id" = i32, Path, description = "Application ID")
    ),
    responses(
        (status = 200, description = "Application rejected", body = SuccessDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Application not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reject_application(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = ApplicationService::new(&state.db);
    service.reject(id).await?;

    Ok((
        StatusCode::OK,
        Json(SuccessDto {
            message: format!("Application {} rejected", id),
        }),
    ))
}

/// Add a listing directly.
///
/// # Access Control
/// - `Admin` - Only admins can add listings directly
#[utoipa::path(
    post,
    path = "/api/admin/servers",
    tag = ADMIN_TAG,
    request_body = AdminListingDto,
    responses(
        (status = 201, description = "Listing created", body = ServerListingDto),
        (status = 400, description = "Invalid listing data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_server(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<AdminListingDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let param = CreateListingParam::from_admin_dto(payload)?;

    let service = ListingService::new(&state.db);
    let listing = service.create(param).await?;

    Ok((StatusCode::CREATED, Json(listing.into_dto())))
}

/// Replace a listing's editable fields, including verification and owner.
///
/// Bump count and last bump time are not editable.
///
/// # Access Control
/// - `Admin` - Only admins can edit any listing
#[utoipa::path(
    put,
    path = "/api/admin/servers/{id}",
    tag = ADMIN_TAG,
    params(
        ("id" = i32, Path, description = "Listing ID")
    ),
    request_body = AdminListingDto,
    responses(
        (status = 200, description = "Listing updated", body = ServerListingDto),
        (status = 400, description = "Invalid listing data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Listing not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn replace_server(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<AdminListingDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let param = UpdateListingParam::from_admin_dto(payload)?;

    let service = ListingService::new(&state.db);
    let listing = service.update(id, param).await?;

    Ok((StatusCode::OK, Json(listing.into_dto())))
}

/// Remove a listing and its bump history.
///
/// # Access Control
/// - `Admin` - Only admins can remove listings
#[utoipa::path(
    delete,
    path = "/api/admin/servers/{id}",
    tag = ADMIN_TAG,
    params(
        ("id" = i32, Path, description = "Listing ID")
    ),
    responses(
        (status = 204, description = "Listing removed"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Listing not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_server(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = ListingService::new(&state.db);
    service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
