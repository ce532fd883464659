//! Application service for submissions and admin review.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::application::ApplicationRepository,
    error::AppError,
    model::{
        application::{
            Application, GetApplicationsParam, PaginatedApplications, SubmitApplicationParam,
        },
        listing::ServerListing,
    },
};

pub struct ApplicationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ApplicationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a new application for admin review.
    pub async fn submit(&self, param: SubmitApplicationParam) -> Result<Application, AppError> {
        let repo = ApplicationRepository::new(self.db);

        let application = repo.create(param).await?;
        tracing::info!(
            "Application {} ({}) submitted by {}",
            application.id,
            application.name,
            application.representative_id
        );

        Ok(application)
    }

    /// Gets a page of pending applications.
    pub async fn get_paginated(
        &self,
        param: GetApplicationsParam,
    ) -> Result<PaginatedApplications, AppError> {
        let repo = ApplicationRepository::new(self.db);

        repo.get_paginated(param).await
    }

    /// Approves an application, converting it into an unverified listing.
    ///
    /// # Returns
    /// - `Ok(ServerListing)` - The new listing, owned by the representative
    /// - `Err(AppError::NotFound)` - No pending application with that ID
    pub async fn approve(&self, id: i32) -> Result<ServerListing, AppError> {
        let repo = ApplicationRepository::new(self.db);

        let listing = repo
            .approve(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Application {} not found", id)))?;
        tracing::info!("Application {} approved as listing {}", id, listing.id);

        Ok(listing)
    }

    /// Rejects an application, discarding it.
    ///
    /// # Returns
    /// - `Ok(())` - Application discarded
    /// - `Err(AppError::NotFound)` - No pending application with that ID
    pub async fn reject(&self, id: i32) -> Result<(), AppError> {
        let repo = ApplicationRepository::new(self.db);

        if !repo.delete(id).await? {
            return Err(AppError::NotFound(format!("Application {} not found", id)));
        }
        tracing::info!("Application {} rejected", id);

        Ok(())
    }
}
