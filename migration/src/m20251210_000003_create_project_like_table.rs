use sea_orm_migration::{prelude::*, schema::*};

use super::m20251210_000001_create_user_table::User;
use super::m20251210_000002_create_project_table::Project;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProjectLike::Table)
                    .if_not_exists()
                    .col(pk_auto(ProjectLike::Id))
                    .col(integer(ProjectLike::ProjectId))
                    .col(integer(ProjectLike::UserId))
                    .col(timestamp_with_time_zone(ProjectLike::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_like_project_id")
                            .from(ProjectLike::Table, ProjectLike::ProjectId)
                            .to(Project::Table, Project::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_like_user_id")
                            .from(ProjectLike::Table, ProjectLike::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_project_like_unique")
                            .col(ProjectLike::ProjectId)
                            .col(ProjectLike::UserId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProjectLike::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ProjectLike {
    Table,
    Id,
    ProjectId,
    UserId,
    CreatedAt,
}
