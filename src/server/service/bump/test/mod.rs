use chrono::{Duration, TimeZone, Utc};
use sea_orm::{ConnectionTrait, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::{internal::InternalError, AppError},
    model::bump::{BumpParam, BumpResult, BumpSource, CooldownStatus},
    service::bump::BumpService,
};

mod history;
mod status;

fn param(server_id: i32) -> BumpParam {
    BumpParam {
        server_id,
        actor_id: "123456789".to_string(),
        source: BumpSource::Manual,
    }
}
