use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::api::{deserialize_option_u64_from_string, serialize_option_u64_as_string};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ServerListingDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub invite_link: String,
    pub member_count: i32,
    pub logo_url: Option<String>,
    pub verified: bool,
    pub tags: Vec<String>,
    #[serde(
        serialize_with = "serialize_option_u64_as_string",
        deserialize_with = "deserialize_option_u64_from_string"
    )]
    #[schema(value_type = Option<String>)]
    pub owner_id: Option<u64>,
    #[serde(
        serialize_with = "serialize_option_u64_as_string",
        deserialize_with = "deserialize_option_u64_from_string"
    )]
    #[schema(value_type = Option<String>)]
    pub guild_id: Option<u64>,
    pub last_bump_at: Option<DateTime<Utc>>,
    pub bump_count: i32,
    pub auto_update: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedServerListingsDto {
    pub servers: Vec<ServerListingDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

/// Payload for an admin adding a listing directly, or replacing one in full.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AdminListingDto {
    pub name: String,
    pub description: String,
    pub invite_link: String,
    #[serde(default)]
    pub member_count: i32,
    pub logo_url: Option<String>,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(
        default,
        serialize_with = "serialize_option_u64_as_string",
        deserialize_with = "deserialize_option_u64_from_string"
    )]
    #[schema(value_type = Option<String>)]
    pub owner_id: Option<u64>,
    #[serde(
        default,
        serialize_with = "serialize_option_u64_as_string",
        deserialize_with = "deserialize_option_u64_from_string"
    )]
    #[schema(value_type = Option<String>)]
    pub guild_id: Option<u64>,
    #[serde(default)]
    pub auto_update: bool,
}

/// Fields a listing owner may change on their own listing.
///
/// Absent fields are left untouched.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct OwnerListingUpdateDto {
    pub description: Option<String>,
    pub invite_link: Option<String>,
    pub logo_url: Option<String>,
    pub tags: Option<Vec<String>>,
    pub auto_update: Option<bool>,
}
