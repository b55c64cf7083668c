use crate::server::data::article_like::ArticleLikeRepository;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait, SqlErr};
use test_utils::{builder::TestBuilder, factory};

mod count;
mod delete;
