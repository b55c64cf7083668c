use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::ArticleStatus;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "article")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub status: ArticleStatus,
    pub thumbnail_image_uri: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(has_many = "super::article_hashtag::Entity")]
    ArticleHashtag,
    #[sea_orm(has_many = "super::article_like::Entity")]
    ArticleLike,
    #[sea_orm(has_many = "super::article_subscribe::Entity")]
    ArticleSubscribe,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::article_hashtag::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ArticleHashtag.def()
    }
}

impl Related<super::article_like::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ArticleLike.def()
    }
}

impl Related<super::article_subscribe::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ArticleSubscribe.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
