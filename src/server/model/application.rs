//! Application domain models and parameters.
//!
//! An application is a pending request from a server representative to join the
//! alliance. It is either approved (converted into a listing) or rejected (discarded).

use chrono::{DateTime, Utc};

use crate::{
    model::application::{ApplicationDto, PaginatedApplicationsDto, SubmitApplicationDto},
    server::{
        error::AppError,
        util::{
            parse::{parse_tags, parse_u64_from_string},
            validate::{
                normalize_tags, validate_description, validate_invite_link, validate_logo_url,
                validate_member_count, validate_name,
            },
        },
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Application {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub invite_link: String,
    pub member_count: i32,
    pub logo_url: Option<String>,
    pub tags: Vec<String>,
    /// Discord ID of the user who submitted the application.
    pub representative_id: u64,
    pub submitted_at: DateTime<Utc>,
}

impl Application {
    /// Converts an entity model to an application domain model.
    ///
    /// # Returns
    /// - `Ok(Application)` - The converted application
    /// - `Err(AppError::InternalErr(ParseStringId))` - Stored representative ID is not a u64
    pub fn from_entity(entity: entity::application::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            invite_link: entity.invite_link,
            member_count: entity.member_count,
            logo_url: entity.logo_url,
            tags: parse_tags(&entity.tags),
            representative_id: parse_u64_from_string(entity.representative_id)?,
            submitted_at: entity.submitted_at,
        })
    }

    pub fn into_dto(self) -> ApplicationDto {
        ApplicationDto {
            id: self.id,
            name: self.name,
            description: self.description,
            invite_link: self.invite_link,
            member_count: self.member_count,
            logo_url: self.logo_url,
            tags: self.tags,
            representative_id: self.representative_id,
            submitted_at: self.submitted_at,
        }
    }
}

/// Parameters for submitting an application.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitApplicationParam {
    pub name: String,
    pub description: String,
    pub invite_link: String,
    pub member_count: i32,
    pub logo_url: Option<String>,
    pub tags: Vec<String>,
    pub representative_id: u64,
}

impl SubmitApplicationParam {
    /// Validates a public submission, attributing it to the session user.
    ///
    /// # Returns
    /// - `Ok(SubmitApplicationParam)` - Validated parameters
    /// - `Err(AppError::BadRequest)` - A field failed validation
    pub fn from_dto(representative_id: u64, dto: SubmitApplicationDto) -> Result<Self, AppError> {
        Ok(Self {
            name: validate_name(&dto.name)?,
            description: validate_description(&dto.description)?,
            invite_link: validate_invite_link(&dto.invite_link)?,
            member_count: validate_member_count(dto.member_count)?,
            logo_url: validate_logo_url(dto.logo_url)?,
            tags: normalize_tags(dto.tags)?,
            representative_id,
        })
    }
}

/// Parameters for paginated application queries.
#[derive(Debug, Clone)]
pub struct GetApplicationsParam {
    pub page: u64,
    pub per_page: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedApplications {
    pub applications: Vec<Application>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedApplications {
    pub fn into_dto(self) -> PaginatedApplicationsDto {
        PaginatedApplicationsDto {
            applications: self
                .applications
                .into_iter()
                .map(|a| a.into_dto())
                .collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
