use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::api::{deserialize_u64_from_string, serialize_u64_as_string};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SubmitApplicationDto {
    pub name: String,
    pub description: String,
    pub invite_link: String,
    #[serde(default)]
    pub member_count: i32,
    pub logo_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ApplicationDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub invite_link: String,
    pub member_count: i32,
    pub logo_url: Option<String>,
    pub tags: Vec<String>,
    #[serde(
        serialize_with = "serialize_u64_as_string",
        deserialize_with = "deserialize_u64_from_string"
    )]
    #[schema(value_type = String)]
    pub representative_id: u64,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedApplicationsDto {
    pub applications: Vec<ApplicationDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
