use crate::server::{
    data::article::ArticleRepository,
    model::article::{ArticleChanges, NewArticle},
};
use entity::sea_orm_active_enums::ArticleStatus;
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_all;
mod update;

fn new_article(user_id: i32, hashtags: &[&str]) -> NewArticle {
    NewArticle {
        user_id,
        title: "Hello".to_string(),
        content: "World".to_string(),
        status: ArticleStatus::Published,
        thumbnail_image_uri: String::new(),
        hashtags: hashtags.iter().map(|h| h.to_string()).collect(),
    }
}
