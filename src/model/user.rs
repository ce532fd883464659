use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::api::{
    deserialize_option_u64_from_string, serialize_option_u64_as_string,
};

/// The identity attached to the current session.
///
/// `discord_id` is absent for an admin who signed in with the shared password only.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct SessionUserDto {
    #[serde(
        serialize_with = "serialize_option_u64_as_string",
        deserialize_with = "deserialize_option_u64_from_string"
    )]
    #[schema(value_type = Option<String>)]
    pub discord_id: Option<u64>,
    pub name: Option<String>,
    pub admin: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct AdminLoginDto {
    pub password: String,
}
