use crate::server::{data::user::UserRepository, model::user::UpsertGithubUserParam};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod find_by_id;
mod upsert_github;
