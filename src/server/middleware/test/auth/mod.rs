use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{auth::AuthGuard, auth::Permission, session::AuthSession},
};
use test_utils::{builder::TestBuilder, factory};

mod require_admin;
mod require_listing_owner;
mod require_logged_in;
