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
                    .table(ArticleSubscribe::Table)
                    .if_not_exists()
                    .col(pk_auto(ArticleSubscribe::Id))
                    .col(integer(ArticleSubscribe::ArticleId))
                    .col(integer(ArticleSubscribe::SubscriberId))
                    .col(timestamp_with_time_zone(ArticleSubscribe::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_article_subscribe_article_id")
                            .from(ArticleSubscribe::Table, ArticleSubscribe::ArticleId)
                            .to(Article::Table, Article::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_article_subscribe_subscriber_id")
                            .from(ArticleSubscribe::Table, ArticleSubscribe::SubscriberId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_article_subscribe_unique")
                            .col(ArticleSubscribe::ArticleId)
                            .col(ArticleSubscribe::SubscriberId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ArticleSubscribe::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ArticleSubscribe {
    Table,
    Id,
    ArticleId,
    SubscriberId,
    CreatedAt,
}
