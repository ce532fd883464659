//! Application factory for creating pending membership applications.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test applications with customizable fields.
pub struct ApplicationFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: String,
    invite_link: String,
    member_count: i32,
    logo_url: Option<String>,
    tags: String,
    representative_id: String,
}

impl<'a> ApplicationFactory<'a> {
    /// Creates a new ApplicationFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Applicant {id}"`
    /// - invite_link: `"https://discord.gg/apply{id}"`
    /// - representative_id: `"{id}"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Applicant {}", id),
            description: format!("Application from server {}", id),
            invite_link: format!("https://discord.gg/apply{}", id),
            member_count: 50,
            logo_url: None,
            tags: String::new(),
            representative_id: id.to_string(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn member_count(mut self, member_count: i32) -> Self {
        self.member_count = member_count;
        self
    }

    pub fn logo_url(mut self, logo_url: impl Into<String>) -> Self {
        self.logo_url = Some(logo_url.into());
        self
    }

    pub fn tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = tags.into();
        self
    }

    pub fn representative_id(mut self, representative_id: impl Into<String>) -> Self {
        self.representative_id = representative_id.into();
        self
    }

    /// Builds and inserts the application entity into the database.
    pub async fn build(self) -> Result<entity::application::Model, DbErr> {
        entity::application::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            invite_link: ActiveValue::Set(self.invite_link),
            member_count: ActiveValue::Set(self.member_count),
            logo_url: ActiveValue::Set(self.logo_url),
            tags: ActiveValue::Set(self.tags),
            representative_id: ActiveValue::Set(self.representative_id),
            submitted_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an application with default values.
pub async fn create_application(
    db: &DatabaseConnection,
) -> Result<entity::application::Model, DbErr> {
    ApplicationFactory::new(db).build().await
}
