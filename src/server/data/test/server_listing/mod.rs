use crate::server::{
    data::server_listing::ServerListingRepository,
    error::AppError,
    model::listing::{
        CreateListingParam, GetListingsParam, RefreshStatsParam, UpdateListingParam,
    },
};
use chrono::{Duration, TimeZone, Utc};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_leaderboard;
mod get_paginated;
mod record_bump;
mod refresh_stats;
mod update;

fn create_param(name: &str) -> CreateListingParam {
    CreateListingParam {
        name: name.to_string(),
        description: "A friendly server".to_string(),
        invite_link: "https://discord.gg/friendly".to_string(),
        member_count: 120,
        logo_url: None,
        verified: false,
        tags: vec!["gaming".to_string(), "chill".to_string()],
        owner_id: Some(123456789),
        guild_id: None,
        auto_update: true,
    }
}
