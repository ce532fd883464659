//! Route table and OpenAPI document.

use axum::{
    routing::{get, post, put},
    Json, Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        application::{ApplicationDto, PaginatedApplicationsDto, SubmitApplicationDto},
        bump::{BumpEventDto, BumpOutcomeDto, BumpStatusDto, LeaderboardEntryDto},
        listing::{
            AdminListingDto, OwnerListingUpdateDto, PaginatedServerListingsDto, ServerListingDto,
        },
        user::{AdminLoginDto, SessionUserDto},
    },
    server::{
        controller::{admin, application, auth, bump, listing},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Alliance Directory API"),
    paths(
        auth::login,
        auth::callback,
        auth::logout,
        auth::get_user,
        auth::admin_login,
        listing::get_servers,
        listing::get_server,
        listing::update_server,
        listing::get_user_servers,
        bump::bump_server,
        bump::get_bump_status,
        bump::get_bump_history,
        bump::get_leaderboard,
        application::submit_application,
        admin::get_applications,
        admin::approve_application,
        admin::reject_application,
        admin::create_server,
        admin::replace_server,
        admin::delete_server,
    ),
    components(schemas(
        ErrorDto,
        SuccessDto,
        SessionUserDto,
        AdminLoginDto,
        ServerListingDto,
        PaginatedServerListingsDto,
        AdminListingDto,
        OwnerListingUpdateDto,
        SubmitApplicationDto,
        ApplicationDto,
        PaginatedApplicationsDto,
        BumpOutcomeDto,
        BumpStatusDto,
        BumpEventDto,
        LeaderboardEntryDto,
    )),
    tags(
        (name = "auth", description = "Discord login and admin sessions"),
        (name = "listing", description = "Server directory"),
        (name = "bump", description = "Bumps and leaderboard"),
        (name = "application", description = "Alliance applications"),
        (name = "admin", description = "Admin panel"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", get(auth::login))
        .route("/api/auth/callback", get(auth::callback))
        .route("/api/auth/logout", get(auth::logout))
        .route("/api/auth/user", get(auth::get_user))
        .route("/api/admin/login", post(auth::admin_login))
        .route("/api/servers", get(listing::get_servers))
        .route(
            "/api/servers/{id}",
            get(listing::get_server).patch(listing::update_server),
        )
        .route(
            "/api/servers/{id}/bump",
            get(bump::get_bump_status).post(bump::bump_server),
        )
        .route("/api/servers/{id}/bumps", get(bump::get_bump_history))
        .route("/api/leaderboard", get(bump::get_leaderboard))
        .route("/api/user/servers", get(listing::get_user_servers))
        .route("/api/applications", post(application::submit_application))
        .route("/api/admin/applications", get(admin::get_applications))
        .route(
            "/api/admin/applications/{id}/approve",
            post(admin::approve_application),
        )
        .route(
            "/api/admin/applications/{id}/reject",
            post(admin::reject_application),
        )
        .route("/api/admin/servers", post(admin::create_server))
        .route(
            "/api/admin/servers/{id}",
            put(admin::replace_server).delete(admin::delete_server),
        )
        .route("/api/docs/openapi.json", get(openapi))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
