use sea_orm::DatabaseConnection;
use serenity::http::Http;
use std::sync::Arc;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{error::AppError, service::stats::StatsService};

/// Starts the hourly listing stats refresh.
///
/// Every hour on the hour, listings with `auto_update` enabled have their member
/// count, logo and guild ID refreshed from their Discord invite.
///
/// # Arguments
/// - `db`: Database connection
/// - `discord_http`: Discord HTTP client used to resolve invites
pub async fn start_scheduler(
    db: DatabaseConnection,
    discord_http: Arc<Http>,
) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async("0 0 * * * *", move |_uuid, _lock| {
        let db = db.clone();
        let http = discord_http.clone();

        Box::pin(async move {
            refresh_stats(&db, http).await;
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Listing stats scheduler started");

    Ok(())
}

async fn refresh_stats(db: &DatabaseConnection, discord_http: Arc<Http>) {
    match StatsService::new(db, discord_http).refresh_all().await {
        Ok(summary) => tracing::info!(
            "Refreshed listing stats: {} updated, {} skipped, {} failed",
            summary.updated,
            summary.skipped,
            summary.failed
        ),
        Err(e) => tracing::error!("Error refreshing listing stats: {}", e),
    }
}
