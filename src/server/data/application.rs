//! Application data repository.
//!
//! Applications are inserted on public submission and removed on review. Approval
//! inserts the resulting listing and removes the application in one transaction.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder,
    TransactionTrait,
};

use crate::server::{
    data::server_listing::insert_listing,
    error::AppError,
    model::{
        application::{
            Application, GetApplicationsParam, PaginatedApplications, SubmitApplicationParam,
        },
        listing::{CreateListingParam, ServerListing},
    },
    util::parse::join_tags,
};

pub struct ApplicationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ApplicationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a submitted application with the current time as submission time.
    ///
    /// # Returns
    /// - `Ok(Application)` - The stored application
    /// - `Err(AppError)` - Database error during insert
    pub async fn create(&self, param: SubmitApplicationParam) -> Result<Application, AppError> {
        let entity = entity::application::ActiveModel {
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            invite_link: ActiveValue::Set(param.invite_link),
            member_count: ActiveValue::Set(param.member_count),
            logo_url: ActiveValue::Set(param.logo_url),
            tags: ActiveValue::Set(join_tags(&param.tags)),
            representative_id: ActiveValue::Set(param.representative_id.to_string()),
            submitted_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Application::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Application>, AppError> {
        let entity = entity::prelude::Application::find_by_id(id)
            .one(self.db)
            .await?;

        entity.map(Application::from_entity).transpose()
    }

    /// Gets a page of pending applications, oldest submission first.
    pub async fn get_paginated(
        &self,
        param: GetApplicationsParam,
    ) -> Result<PaginatedApplications, AppError> {
        let paginator = entity::prelude::Application::find()
            .order_by_asc(entity::application::Column::SubmittedAt)
            .order_by_asc(entity::application::Column::Id)
            .paginate(self.db, param.per_page);

        let counts = paginator.num_items_and_pages().await?;
        let entities = paginator.fetch_page(param.page).await?;
        let applications = entities
            .into_iter()
            .map(Application::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PaginatedApplications {
            applications,
            total: counts.number_of_items,
            page: param.page,
            per_page: param.per_page,
            total_pages: counts.number_of_pages,
        })
    }

    /// Deletes an application.
    ///
    /// # Returns
    /// - `Ok(true)` - Application deleted
    /// - `Ok(false)` - No application with that ID
    /// - `Err(AppError)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::Application::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Converts an application into a listing.
    ///
    /// The listing insert and the application delete share one transaction, so an
    /// application is never both pending and listed.
    ///
    /// # Returns
    /// - `Ok(Some(ServerListing))` - The listing created from the application
    /// - `Ok(None)` - No application with that ID
    /// - `Err(AppError)` - Database error, the transaction is rolled back
    pub async fn approve(&self, id: i32) -> Result<Option<ServerListing>, AppError> {
        let txn = self.db.begin().await?;

        let Some(entity) = entity::prelude::Application::find_by_id(id)
            .one(&txn)
            .await?
        else {
            txn.rollback().await?;
            return Ok(None);
        };

        let application = Application::from_entity(entity)?;
        let listing = insert_listing(&txn, CreateListingParam::from_application(application)).await?;

        entity::prelude::Application::delete_by_id(id)
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(Some(listing))
    }
}
