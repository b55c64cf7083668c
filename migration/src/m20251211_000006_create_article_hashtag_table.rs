use sea_orm_migration::{prelude::*, schema::*};

use super::m20251211_000005_create_article_table::Article;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ArticleHashtag::Table)
                    .if_not_exists()
                    .col(pk_auto(ArticleHashtag::Id))
                    .col(integer(ArticleHashtag::ArticleId))
                    .col(integer(ArticleHashtag::Position))
                    .col(string(ArticleHashtag::Name))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_article_hashtag_article_id")
                            .from(ArticleHashtag::Table, ArticleHashtag::ArticleId)
                            .to(Article::Table, Article::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_article_hashtag_unique")
                            .col(ArticleHashtag::ArticleId)
                            .col(ArticleHashtag::Name),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ArticleHashtag::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ArticleHashtag {
    Table,
    Id,
    ArticleId,
    Position,
    Name,
}
