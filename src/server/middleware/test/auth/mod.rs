use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{
        auth::{ensure_owner, is_owner, AuthGuard, Owned},
        session::AuthSession,
    },
    model::user::User,
};
use test_utils::{builder::TestBuilder, factory};

mod current_user;
mod ownership;
