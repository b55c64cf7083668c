use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    ModelTrait, PaginatorTrait, QueryFilter, QuerySelect,
};
use std::collections::HashMap;

pub struct ProjectSubscribeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProjectSubscribeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks whether a subscribe row exists for the pair.
    pub async fn exists(&self, project_id: i32, subscriber_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::ProjectSubscribe::find()
            .filter(entity::project_subscribe::Column::ProjectId.eq(project_id))
            .filter(entity::project_subscribe::Column::SubscriberId.eq(subscriber_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Inserts a subscribe row; fails with a unique violation when the pair exists
    pub async fn create(
        &self,
        project_id: i32,
        subscriber_id: i32,
    ) -> Result<entity::project_subscribe::Model, DbErr> {
        entity::project_subscribe::ActiveModel {
            project_id: ActiveValue::Set(project_id),
            subscriber_id: ActiveValue::Set(subscriber_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find(
        &self,
        project_id: i32,
        subscriber_id: i32,
    ) -> Result<Option<entity::project_subscribe::Model>, DbErr> {
        entity::prelude::ProjectSubscribe::find()
            .filter(entity::project_subscribe::Column::ProjectId.eq(project_id))
            .filter(entity::project_subscribe::Column::SubscriberId.eq(subscriber_id))
            .one(self.db)
            .await
    }

    /// Deletes a previously found subscribe row.
    pub async fn delete(&self, model: entity::project_subscribe::Model) -> Result<(), DbErr> {
        model.delete(self.db).await?;
        Ok(())
    }

    /// Counts subscribe rows per project in a single grouped query.
    ///
    /// Projects without rows are absent from the returned map.
    pub async fn count_per_project(&self) -> Result<HashMap<i32, u64>, DbErr> {
        let rows: Vec<(i32, i64)> = entity::prelude::ProjectSubscribe::find()
            .select_only()
            .column(entity::project_subscribe::Column::ProjectId)
            .column_as(entity::project_subscribe::Column::Id.count(), "count")
            .group_by(entity::project_subscribe::Column::ProjectId)
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(id, count)| (id, count as u64))
            .collect())
    }
}
