use crate::server::{
    data::bump_event::BumpEventRepository, error::AppError, model::bump::BumpSource,
};
use chrono::{Duration, TimeZone, Utc};
use test_utils::{builder::TestBuilder, factory};

mod count_by_server;
mod create;
mod get_recent_by_server;
