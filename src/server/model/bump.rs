//! Bump domain models.
//!
//! A bump marks a listing as recently active and is limited by a fixed cooldown
//! per listing. Every successful bump is recorded as an append-only `BumpEvent`.

use chrono::{DateTime, Duration, Utc};
use std::fmt;
use std::str::FromStr;

use crate::{
    model::bump::{BumpEventDto, BumpOutcomeDto, BumpStatusDto, LeaderboardEntryDto},
    server::{
        error::{internal::InternalError, AppError},
        model::listing::ServerListing,
    },
};

/// Cooldown between two bumps of the same listing when none is configured.
pub const DEFAULT_BUMP_COOLDOWN_MINUTES: i64 = 120;

/// Surface a bump originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpSource {
    /// Owner or admin through the web API.
    Manual,
    /// Discord slash command.
    Bot,
    /// Automated surfaces acting without a user.
    Auto,
}

impl BumpSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Manual => "manual",
            Self::Bot => "bot",
            Self::Auto => "auto",
        }
    }
}

impl fmt::Display for BumpSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BumpSource {
    type Err = InternalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "manual" => Ok(Self::Manual),
            "bot" => Ok(Self::Bot),
            "auto" => Ok(Self::Auto),
            other => Err(InternalError::UnknownBumpSource(other.to_string())),
        }
    }
}

/// Whether a listing may be bumped at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CooldownStatus {
    Ready,
    CoolingDown {
        /// Time left until the cooldown expires, never more than the cooldown.
        remaining: Duration,
        /// `last_bump_at + cooldown`.
        next_eligible_at: DateTime<Utc>,
    },
}

impl CooldownStatus {
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }

    pub fn into_dto(self) -> BumpStatusDto {
        match self {
            Self::Ready => BumpStatusDto {
                can_bump: true,
                remaining: None,
                remaining_seconds: 0,
                next_eligible_at: None,
            },
            Self::CoolingDown {
                remaining,
                next_eligible_at,
            } => BumpStatusDto {
                can_bump: false,
                remaining: Some(format_remaining(remaining)),
                remaining_seconds: remaining.num_seconds(),
                next_eligible_at: Some(next_eligible_at),
            },
        }
    }
}

/// Formats a remaining wait as whole hours and minutes, e.g. `"1h 5m"`.
///
/// Seconds are truncated, so 59 seconds formats as `"0h 0m"`.
pub fn format_remaining(remaining: Duration) -> String {
    let minutes = remaining.num_minutes().max(0);
    format!("{}h {}m", minutes / 60, minutes % 60)
}

/// Parameters for bumping a listing.
#[derive(Debug, Clone, PartialEq)]
pub struct BumpParam {
    pub server_id: i32,
    /// Discord ID of the bumping user, or `"admin"` for a password-only admin session.
    pub actor_id: String,
    pub source: BumpSource,
}

/// Result of a bump attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum BumpResult {
    Bumped {
        listing_name: String,
        bump_count: i32,
        bumped_at: DateTime<Utc>,
        next_eligible_at: DateTime<Utc>,
    },
    OnCooldown {
        listing_name: String,
        remaining: Duration,
        next_eligible_at: DateTime<Utc>,
    },
}

impl BumpResult {
    pub fn is_bumped(&self) -> bool {
        matches!(self, Self::Bumped { .. })
    }

    /// Human-readable summary shown on the web and in Discord.
    pub fn message(&self) -> String {
        match self {
            Self::Bumped {
                listing_name,
                bump_count,
                ..
            } => format!("Bumped {}! Total bumps: {}", listing_name, bump_count),
            Self::OnCooldown {
                listing_name,
                remaining,
                ..
            } => format!(
                "{} was bumped recently. You can bump again in {}.",
                listing_name,
                format_remaining(*remaining)
            ),
        }
    }

    pub fn into_dto(self) -> BumpOutcomeDto {
        let message = self.message();
        match self {
            Self::Bumped {
                bump_count,
                next_eligible_at,
                ..
            } => BumpOutcomeDto {
                success: true,
                message,
                bump_count: Some(bump_count),
                next_eligible_at: Some(next_eligible_at),
            },
            Self::OnCooldown {
                next_eligible_at, ..
            } => BumpOutcomeDto {
                success: false,
                message,
                bump_count: None,
                next_eligible_at: Some(next_eligible_at),
            },
        }
    }
}

/// Append-only audit record of a successful bump.
#[derive(Debug, Clone, PartialEq)]
pub struct BumpEvent {
    pub id: i32,
    pub server_id: i32,
    pub actor_id: String,
    pub bumped_at: DateTime<Utc>,
    pub source: BumpSource,
}

impl BumpEvent {
    /// Converts an entity model to a bump event domain model.
    ///
    /// # Returns
    /// - `Ok(BumpEvent)` - The converted event
    /// - `Err(AppError::InternalErr(UnknownBumpSource))` - Stored source is not recognized
    pub fn from_entity(entity: entity::bump_event::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            server_id: entity.server_id,
            actor_id: entity.actor_id,
            bumped_at: entity.bumped_at,
            source: entity.source.parse()?,
        })
    }

    pub fn into_dto(self) -> BumpEventDto {
        BumpEventDto {
            id: self.id,
            server_id: self.server_id,
            actor_id: self.actor_id,
            bumped_at: self.bumped_at,
            source: self.source.to_string(),
        }
    }
}

/// Converts leaderboard listings into ranked DTOs, rank 1 first.
pub fn leaderboard_into_dto(listings: Vec<ServerListing>) -> Vec<LeaderboardEntryDto> {
    listings
        .into_iter()
        .enumerate()
        .map(|(i, listing)| LeaderboardEntryDto {
            rank: i as u32 + 1,
            server_id: listing.id,
            name: listing.name,
            logo_url: listing.logo_url,
            bump_count: listing.bump_count,
            last_bump_at: listing.last_bump_at,
        })
        .collect()
}
