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
                    .table(ProjectSubscribe::Table)
                    .if_not_exists()
                    .col(pk_auto(ProjectSubscribe::Id))
                    .col(integer(ProjectSubscribe::ProjectId))
                    .col(integer(ProjectSubscribe::SubscriberId))
                    .col(timestamp_with_time_zone(ProjectSubscribe::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_subscribe_project_id")
                            .from(ProjectSubscribe::Table, ProjectSubscribe::ProjectId)
                            .to(Project::Table, Project::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_subscribe_subscriber_id")
                            .from(ProjectSubscribe::Table, ProjectSubscribe::SubscriberId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_project_subscribe_unique")
                            .col(ProjectSubscribe::ProjectId)
                            .col(ProjectSubscribe::SubscriberId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProjectSubscribe::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ProjectSubscribe {
    Table,
    Id,
    ProjectId,
    SubscriberId,
    CreatedAt,
}
