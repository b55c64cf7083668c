use sea_orm_migration::{prelude::*, schema::*};

use super::m20251210_000001_create_user_table::User;
use super::m20251211_000005_create_article_table::Article;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ArticleLike::Table)
                    .if_not_exists()
                    .col(pk_auto(ArticleLike::Id))
                    .col(integer(ArticleLike::ArticleId))
                    .col(integer(ArticleLike::UserId))
                    .col(timestamp_with_time_zone(ArticleLike::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_article_like_article_id")
                            .from(ArticleLike::Table, ArticleLike::ArticleId)
                            .to(Article::Table, Article::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_article_like_user_id")
                            .from(ArticleLike::Table, ArticleLike::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_article_like_unique")
                            .col(ArticleLike::ArticleId)
                            .col(ArticleLike::UserId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ArticleLike::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ArticleLike {
    Table,
    Id,
    ArticleId,
    UserId,
    CreatedAt,
}
