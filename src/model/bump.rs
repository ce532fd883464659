use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Result of a bump attempt, shared by every surface that can bump.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BumpOutcomeDto {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub bump_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub next_eligible_at: Option<DateTime<Utc>>,
}

/// Cooldown status of a listing, computed without bumping it.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BumpStatusDto {
    pub can_bump: bool,
    /// Remaining wait formatted as `"{h}h {m}m"`, absent when a bump is allowed.
    pub remaining: Option<String>,
    pub remaining_seconds: i64,
    pub next_eligible_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BumpEventDto {
    pub id: i32,
    pub server_id: i32,
    pub actor_id: String,
    pub bumped_at: DateTime<Utc>,
    pub source: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct LeaderboardEntryDto {
    pub rank: u32,
    pub server_id: i32,
    pub name: String,
    pub logo_url: Option<String>,
    pub bump_count: i32,
    pub last_bump_at: Option<DateTime<Utc>>,
}
