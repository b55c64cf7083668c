//! Repository for article subscriptions, keyed by (article, subscriber).

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    ModelTrait, PaginatorTrait, QueryFilter, QuerySelect,
};
use std::collections::HashMap;

pub struct ArticleSubscribeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ArticleSubscribeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks whether a subscribe row exists for the pair.
    pub async fn exists(&self, article_id: i32, subscriber_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::ArticleSubscribe::find()
            .filter(entity::article_subscribe::Column::ArticleId.eq(article_id))
            .filter(entity::article_subscribe::Column::SubscriberId.eq(subscriber_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Inserts a subscribe row for the pair.
    ///
    /// # Returns
    /// - `Ok(Model)` - The inserted row
    /// - `Err(DbErr)` - Database error, including a unique violation when the pair
    ///   already exists
    pub async fn create(
        &self,
        article_id: i32,
        subscriber_id: i32,
    ) -> Result<entity::article_subscribe::Model, DbErr> {
        entity::article_subscribe::ActiveModel {
            article_id: ActiveValue::Set(article_id),
            subscriber_id: ActiveValue::Set(subscriber_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds the subscribe row for the pair.
    pub async fn find(
        &self,
        article_id: i32,
        subscriber_id: i32,
    ) -> Result<Option<entity::article_subscribe::Model>, DbErr> {
        entity::prelude::ArticleSubscribe::find()
            .filter(entity::article_subscribe::Column::ArticleId.eq(article_id))
            .filter(entity::article_subscribe::Column::SubscriberId.eq(subscriber_id))
            .one(self.db)
            .await
    }

    /// Deletes a previously found subscribe row.
    pub async fn delete(&self, model: entity::article_subscribe::Model) -> Result<(), DbErr> {
        model.delete(self.db).await?;
        Ok(())
    }

    /// Counts subscribe rows per article in a single grouped query.
    ///
    /// Articles without rows are absent from the returned map.
    pub async fn count_per_article(&self) -> Result<HashMap<i32, u64>, DbErr> {
        let rows: Vec<(i32, i64)> = entity::prelude::ArticleSubscribe::find()
            .select_only()
            .column(entity::article_subscribe::Column::ArticleId)
            .column_as(entity::article_subscribe::Column::Id.count(), "count")
            .group_by(entity::article_subscribe::Column::ArticleId)
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(id, count)| (id, count as u64))
            .collect())
    }
}
