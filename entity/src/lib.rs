pub mod prelude;

pub mod article;
pub mod article_hashtag;
pub mod article_like;
pub mod article_subscribe;
pub mod project;
pub mod project_like;
pub mod project_subscribe;
pub mod sea_orm_active_enums;
pub mod user;
