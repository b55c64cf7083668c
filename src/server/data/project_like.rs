use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    ModelTrait, PaginatorTrait, QueryFilter, QuerySelect,
};
use std::collections::HashMap;

pub struct ProjectLikeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProjectLikeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks whether a like row exists for the pair.
    pub async fn exists(&self, project_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::ProjectLike::find()
            .filter(entity::project_like::Column::ProjectId.eq(project_id))
            .filter(entity::project_like::Column::UserId.eq(user_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Inserts a like row; fails with a unique violation when the pair exists
    pub async fn create(
        &self,
        project_id: i32,
        user_id: i32,
    ) -> Result<entity::project_like::Model, DbErr> {
        entity::project_like::ActiveModel {
            project_id: ActiveValue::Set(project_id),
            user_id: ActiveValue::Set(user_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find(
        &self,
        project_id: i32,
        user_id: i32,
    ) -> Result<Option<entity::project_like::Model>, DbErr> {
        entity::prelude::ProjectLike::find()
            .filter(entity::project_like::Column::ProjectId.eq(project_id))
            .filter(entity::project_like::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Deletes a previously found like row.
    pub async fn delete(&self, model: entity::project_like::Model) -> Result<(), DbErr> {
        model.delete(self.db).await?;
        Ok(())
    }

    /// Counts like rows per project in a single grouped query.
    ///
    /// Projects without rows are absent from the returned map.
    pub async fn count_per_project(&self) -> Result<HashMap<i32, u64>, DbErr> {
        let rows: Vec<(i32, i64)> = entity::prelude::ProjectLike::find()
            .select_only()
            .column(entity::project_like::Column::ProjectId)
            .column_as(entity::project_like::Column::Id.count(), "count")
            .group_by(entity::project_like::Column::ProjectId)
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(id, count)| (id, count as u64))
            .collect())
    }
}
