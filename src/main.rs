mod model;
mod server;

use tracing_subscriber::EnvFilter;

use crate::server::{
    bot, config::Config, error::AppError, scheduler::stats_refresh, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db).await?;
    let http_client = startup::setup_reqwest_client()?;
    let oauth_client = startup::setup_oauth_client(&config)?;

    tracing::info!("Starting server");

    // Initialize Discord bot and extract HTTP client
    let (bot_client, discord_http) = bot::start::init_bot(&config, db.clone()).await?;

    tokio::spawn(async move {
        if let Err(e) = bot::start::start_bot(bot_client).await {
            tracing::error!("Discord bot error: {}", e);
        }
    });

    let scheduler_db = db.clone();
    let scheduler_http = discord_http.clone();
    tokio::spawn(async move {
        if let Err(e) = stats_refresh::start_scheduler(scheduler_db, scheduler_http).await {
            tracing::error!("Listing stats scheduler error: {}", e);
        }
    });

    let state = AppState::new(
        db,
        http_client,
        oauth_client,
        discord_http,
        config.admin_password.clone(),
        config.bump_cooldown,
        config.app_url.clone(),
    );

    let router = server::router::router().layer(session).with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(listener, router).await?;

    Ok(())
}
