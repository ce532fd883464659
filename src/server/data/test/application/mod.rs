use crate::server::{
    data::application::ApplicationRepository,
    error::AppError,
    model::application::{GetApplicationsParam, SubmitApplicationParam},
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod approve;
mod create;
mod delete;
mod get_paginated;
