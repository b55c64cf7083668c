//! Repository for article likes. At most one row exists per (article, user) pair.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    ModelTrait, PaginatorTrait, QueryFilter, QuerySelect,
};
use std::collections::HashMap;

pub struct ArticleLikeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ArticleLikeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks whether a like row exists for the pair.
    pub async fn exists(&self, article_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::ArticleLike::find()
            .filter(entity::article_like::Column::ArticleId.eq(article_id))
            .filter(entity::article_like::Column::UserId.eq(user_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Inserts a like row for the pair.
    ///
    /// # Returns
    /// - `Ok(Model)` - The inserted row
    /// - `Err(DbErr)` - Database error, including a unique violation when the pair
    ///   already exists
    pub async fn create(
        &self,
        article_id: i32,
        user_id: i32,
    ) -> Result<entity::article_like::Model, DbErr> {
        entity::article_like::ActiveModel {
            article_id: ActiveValue::Set(article_id),
            user_id: ActiveValue::Set(user_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds the like row for the pair.
    pub async fn find(
        &self,
        article_id: i32,
        user_id: i32,
    ) -> Result<Option<entity::article_like::Model>, DbErr> {
        entity::prelude::ArticleLike::find()
            .filter(entity::article_like::Column::ArticleId.eq(article_id))
            .filter(entity::article_like::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Deletes a previously found like row.
    pub async fn delete(&self, model: entity::article_like::Model) -> Result<(), DbErr> {
        model.delete(self.db).await?;
        Ok(())
    }

    /// Counts like rows per article in a single grouped query.
    ///
    /// Articles without rows are absent from the returned map.
    pub async fn count_per_article(&self) -> Result<HashMap<i32, u64>, DbErr> {
        let rows: Vec<(i32, i64)> = entity::prelude::ArticleLike::find()
            .select_only()
            .column(entity::article_like::Column::ArticleId)
            .column_as(entity::article_like::Column::Id.count(), "count")
            .group_by(entity::article_like::Column::ArticleId)
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(id, count)| (id, count as u64))
            .collect())
    }
}
