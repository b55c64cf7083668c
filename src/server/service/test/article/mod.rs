use entity::sea_orm_active_enums::ArticleStatus;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

use super::{as_user, thumbnail, ImageCall, RecordingImageStore};
use crate::{
    model::article::{ArticleStatusDto, CreateArticleDto, UpdateArticleDto},
    server::{
        error::{auth::AuthError, AppError},
        model::{
            article::{CreateArticleParams, UpdateArticleParams},
            image::ImageFileType,
        },
        service::article::ArticleService,
    },
};

mod create;
mod get;
mod relation;
mod update;

fn create_request(title: &str, hashtags: &[&str]) -> CreateArticleDto {
    CreateArticleDto {
        title: Some(title.to_string()),
        content: Some("World".to_string()),
        hashtags: hashtags.iter().map(|h| h.to_string()).collect(),
        status: Some(ArticleStatusDto::Published),
        thumbnail_image_path: Some(String::new()),
    }
}
