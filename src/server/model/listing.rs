//! Server listing domain models and parameters.
//!
//! A listing is a member server shown in the alliance directory. Listings are created
//! when an application is approved or an admin adds one directly, and are mutated by
//! owner edits, admin edits, bumps and scheduled stat refreshes.

use chrono::{DateTime, Utc};

use crate::{
    model::listing::{
        AdminListingDto, OwnerListingUpdateDto, PaginatedServerListingsDto, ServerListingDto,
    },
    server::{
        error::AppError,
        model::application::Application,
        util::{
            parse::{parse_optional_u64, parse_tags},
            validate::{
                normalize_tags, validate_description, validate_invite_link, validate_logo_url,
                validate_member_count, validate_name,
            },
        },
    },
};

/// Server listing with directory metadata and bump state.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerListing {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub invite_link: String,
    pub member_count: i32,
    pub logo_url: Option<String>,
    /// Whether an admin has verified the server.
    pub verified: bool,
    pub tags: Vec<String>,
    /// Discord ID of the owner or representative allowed to manage the listing.
    pub owner_id: Option<u64>,
    /// Discord guild the listing belongs to, resolved from its invite.
    pub guild_id: Option<u64>,
    /// When the listing was last bumped, `None` if never bumped.
    pub last_bump_at: Option<DateTime<Utc>>,
    /// Number of successful bumps, equal to the number of recorded bump events.
    pub bump_count: i32,
    /// Whether scheduled stat refreshes should update this listing.
    pub auto_update: bool,
    pub created_at: DateTime<Utc>,
}

impl ServerListing {
    /// Converts an entity model to a listing domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(ServerListing)` - The converted listing
    /// - `Err(AppError::InternalErr(ParseStringId))` - Stored owner or guild ID is not a u64
    pub fn from_entity(entity: entity::server_listing::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            invite_link: entity.invite_link,
            member_count: entity.member_count,
            logo_url: entity.logo_url,
            verified: entity.verified,
            tags: parse_tags(&entity.tags),
            owner_id: parse_optional_u64(entity.owner_id)?,
            guild_id: parse_optional_u64(entity.guild_id)?,
            last_bump_at: entity.last_bump_at,
            bump_count: entity.bump_count,
            auto_update: entity.auto_update,
            created_at: entity.created_at,
        })
    }

    /// Converts the listing domain model to a DTO for API responses.
    pub fn into_dto(self) -> ServerListingDto {
        ServerListingDto {
            id: self.id,
            name: self.name,
            description: self.description,
            invite_link: self.invite_link,
            member_count: self.member_count,
            logo_url: self.logo_url,
            verified: self.verified,
            tags: self.tags,
            owner_id: self.owner_id,
            guild_id: self.guild_id,
            last_bump_at: self.last_bump_at,
            bump_count: self.bump_count,
            auto_update: self.auto_update,
            created_at: self.created_at,
        }
    }

    /// Whether the given Discord user owns this listing.
    pub fn is_owned_by(&self, discord_id: u64) -> bool {
        self.owner_id == Some(discord_id)
    }
}

/// Parameters for creating a listing.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateListingParam {
    pub name: String,
    pub description: String,
    pub invite_link: String,
    pub member_count: i32,
    pub logo_url: Option<String>,
    pub verified: bool,
    pub tags: Vec<String>,
    pub owner_id: Option<u64>,
    pub guild_id: Option<u64>,
    pub auto_update: bool,
}

impl CreateListingParam {
    /// Validates an admin payload into creation parameters.
    ///
    /// # Returns
    /// - `Ok(CreateListingParam)` - Validated parameters
    /// - `Err(AppError::BadRequest)` - A field failed validation
    pub fn from_admin_dto(dto: AdminListingDto) -> Result<Self, AppError> {
        Ok(Self {
            name: validate_name(&dto.name)?,
            description: validate_description(&dto.description)?,
            invite_link: validate_invite_link(&dto.invite_link)?,
            member_count: validate_member_count(dto.member_count)?,
            logo_url: validate_logo_url(dto.logo_url)?,
            verified: dto.verified,
            tags: normalize_tags(dto.tags)?,
            owner_id: dto.owner_id,
            guild_id: dto.guild_id,
            auto_update: dto.auto_update,
        })
    }

    /// Builds listing parameters from an approved application.
    ///
    /// The representative becomes the listing owner. Approved listings start
    /// unverified with auto-update enabled so their stats follow the invite.
    pub fn from_application(application: Application) -> Self {
        Self {
            name: application.name,
            description: application.description,
            invite_link: application.invite_link,
            member_count: application.member_count,
            logo_url: application.logo_url,
            verified: false,
            tags: application.tags,
            owner_id: Some(application.representative_id),
            guild_id: None,
            auto_update: true,
        }
    }
}

/// Parameters for updating a listing. `None` leaves a field unchanged.
///
/// Nullable columns use `Option<Option<_>>` so they can be cleared.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateListingParam {
    pub name: Option<String>,
    pub description: Option<String>,
    pub invite_link: Option<String>,
    pub member_count: Option<i32>,
    pub logo_url: Option<Option<String>>,
    pub verified: Option<bool>,
    pub tags: Option<Vec<String>>,
    pub owner_id: Option<Option<u64>>,
    pub guild_id: Option<Option<u64>>,
    pub auto_update: Option<bool>,
}

impl UpdateListingParam {
    /// Validates an owner self-service edit.
    ///
    /// Owners may only change presentation fields; name, verification, ownership and
    /// counters stay under admin control.
    pub fn from_owner_dto(dto: OwnerListingUpdateDto) -> Result<Self, AppError> {
        Ok(Self {
            description: dto
                .description
                .as_deref()
                .map(validate_description)
                .transpose()?,
            invite_link: dto
                .invite_link
                .as_deref()
                .map(validate_invite_link)
                .transpose()?,
            logo_url: match dto.logo_url {
                Some(logo_url) => Some(validate_logo_url(Some(logo_url))?),
                None => None,
            },
            tags: dto.tags.map(normalize_tags).transpose()?,
            auto_update: dto.auto_update,
            ..Default::default()
        })
    }

    /// Validates a full admin replacement of a listing's editable fields.
    pub fn from_admin_dto(dto: AdminListingDto) -> Result<Self, AppError> {
        let param = CreateListingParam::from_admin_dto(dto)?;

        Ok(Self {
            name: Some(param.name),
            description: Some(param.description),
            invite_link: Some(param.invite_link),
            member_count: Some(param.member_count),
            logo_url: Some(param.logo_url),
            verified: Some(param.verified),
            tags: Some(param.tags),
            owner_id: Some(param.owner_id),
            guild_id: Some(param.guild_id),
            auto_update: Some(param.auto_update),
        })
    }
}

/// Stats resolved from a listing's Discord invite.
#[derive(Debug, Clone, PartialEq)]
pub struct RefreshStatsParam {
    pub member_count: i32,
    pub logo_url: Option<String>,
    pub guild_id: Option<u64>,
}

/// Parameters for paginated listing queries.
#[derive(Debug, Clone)]
pub struct GetListingsParam {
    /// Zero-indexed page number.
    pub page: u64,
    pub per_page: u64,
}

/// Paginated collection of listings with metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedListings {
    pub listings: Vec<ServerListing>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedListings {
    pub fn into_dto(self) -> PaginatedServerListingsDto {
        PaginatedServerListingsDto {
            servers: self.listings.into_iter().map(|l| l.into_dto()).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
