//! Article data repository.
//!
//! Articles are stored together with their ordered hashtag rows. Creation and updates
//! that touch hashtags run inside a transaction so an article is never observed with a
//! partial hashtag set.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, ModelTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::article::{Article, ArticleChanges, NewArticle};

pub struct ArticleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ArticleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts an article and its hashtags, returning the stored article.
    ///
    /// # Arguments
    /// - `new` - Row values including the owner id and the resolved thumbnail reference
    ///
    /// # Returns
    /// - `Ok(Article)` - The created article with generated id and timestamps
    /// - `Err(DbErr)` - Database error; nothing is persisted
    pub async fn create(&self, new: NewArticle) -> Result<Article, DbErr> {
        let txn = self.db.begin().await?;

        let now = Utc::now();
        let article = entity::article::ActiveModel {
            user_id: ActiveValue::Set(new.user_id),
            title: ActiveValue::Set(new.title),
            content: ActiveValue::Set(new.content),
            status: ActiveValue::Set(new.status),
            thumbnail_image_uri: ActiveValue::Set(new.thumbnail_image_uri),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let hashtags = insert_hashtags(&txn, article.id, new.hashtags).await?;

        txn.commit().await?;

        Ok(Article::from_entity(article, hashtags))
    }

    /// Finds an article with its hashtags.
    ///
    /// # Returns
    /// - `Ok(Some(Article))` - Article found
    /// - `Ok(None)` - No article with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Article>, DbErr> {
        let Some(article) = entity::prelude::Article::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let hashtags = article
            .find_related(entity::prelude::ArticleHashtag)
            .all(self.db)
            .await?;

        Ok(Some(Article::from_entity(article, hashtags)))
    }

    /// Gets every article ordered by id, each with its hashtags.
    pub async fn get_all(&self) -> Result<Vec<Article>, DbErr> {
        let rows = entity::prelude::Article::find()
            .order_by_asc(entity::article::Column::Id)
            .find_with_related(entity::prelude::ArticleHashtag)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(article, hashtags)| Article::from_entity(article, hashtags))
            .collect())
    }

    /// Applies the supplied column changes and refreshes `updated_at`.
    ///
    /// When `changes.hashtags` is present the existing hashtag rows are replaced by the
    /// new list in the given order.
    ///
    /// # Returns
    /// - `Ok(Article)` - The updated article
    /// - `Err(DbErr::RecordNotFound)` - No article with that id
    /// - `Err(DbErr)` - Other database error; nothing is persisted
    pub async fn update(&self, id: i32, changes: ArticleChanges) -> Result<Article, DbErr> {
        let txn = self.db.begin().await?;

        let article = entity::prelude::Article::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Article with id {} not found",
                id
            )))?;

        let mut active_model: entity::article::ActiveModel = article.into();
        if let Some(title) = changes.title {
            active_model.title = ActiveValue::Set(title);
        }
        if let Some(content) = changes.content {
            active_model.content = ActiveValue::Set(content);
        }
        if let Some(status) = changes.status {
            active_model.status = ActiveValue::Set(status);
        }
        if let Some(uri) = changes.thumbnail_image_uri {
            active_model.thumbnail_image_uri = ActiveValue::Set(uri);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let article = active_model.update(&txn).await?;

        let hashtags = match changes.hashtags {
            Some(hashtags) => {
                entity::prelude::ArticleHashtag::delete_many()
                    .filter(entity::article_hashtag::Column::ArticleId.eq(id))
                    .exec(&txn)
                    .await?;
                insert_hashtags(&txn, id, hashtags).await?
            }
            None => {
                article
                    .find_related(entity::prelude::ArticleHashtag)
                    .all(&txn)
                    .await?
            }
        };

        txn.commit().await?;

        Ok(Article::from_entity(article, hashtags))
    }
}

/// Inserts hashtag rows numbered by their position in `hashtags`.
async fn insert_hashtags<C: ConnectionTrait>(
    conn: &C,
    article_id: i32,
    hashtags: Vec<String>,
) -> Result<Vec<entity::article_hashtag::Model>, DbErr> {
    let mut models = Vec::with_capacity(hashtags.len());

    for (position, name) in hashtags.into_iter().enumerate() {
        let model = entity::article_hashtag::ActiveModel {
            article_id: ActiveValue::Set(article_id),
            position: ActiveValue::Set(position as i32),
            name: ActiveValue::Set(name),
            ..Default::default()
        }
        .insert(conn)
        .await?;
        models.push(model);
    }

    Ok(models)
}
