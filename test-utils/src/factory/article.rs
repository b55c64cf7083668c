//! Article factory for creating test article entities.
//!
//! Articles require an owning user; hashtags are inserted as ordered
//! `article_hashtag` rows alongside the article.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::sea_orm_active_enums::ArticleStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test articles with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::article::ArticleFactory;
///
/// let article = ArticleFactory::new(&db, user.id)
///     .title("Hello")
///     .hashtags(["rust", "axum"])
///     .build()
///     .await?;
/// ```
pub struct ArticleFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    title: String,
    content: String,
    status: ArticleStatus,
    thumbnail_image_uri: String,
    hashtags: Vec<String>,
}

impl<'a> ArticleFactory<'a> {
    /// Creates a new ArticleFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Article {id}"`
    /// - content: `"Test article content"`
    /// - status: `ArticleStatus::Published`
    /// - thumbnail_image_uri: `""`
    /// - hashtags: none
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - Id of the owning user
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            title: format!("Article {}", id),
            content: "Test article content".to_string(),
            status: ArticleStatus::Published,
            thumbnail_image_uri: String::new(),
            hashtags: Vec::new(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn status(mut self, status: ArticleStatus) -> Self {
        self.status = status;
        self
    }

    pub fn thumbnail_image_uri(mut self, uri: impl Into<String>) -> Self {
        self.thumbnail_image_uri = uri.into();
        self
    }

    /// Sets the hashtags, stored in the given order.
    pub fn hashtags<I, S>(mut self, hashtags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.hashtags = hashtags.into_iter().map(Into::into).collect();
        self
    }

    /// Builds and inserts the article and its hashtags.
    ///
    /// # Returns
    /// - `Ok(entity::article::Model)` - Created article entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::article::Model, DbErr> {
        let now = Utc::now();
        let article = entity::article::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            title: ActiveValue::Set(self.title),
            content: ActiveValue::Set(self.content),
            status: ActiveValue::Set(self.status),
            thumbnail_image_uri: ActiveValue::Set(self.thumbnail_image_uri),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for (position, name) in self.hashtags.into_iter().enumerate() {
            entity::article_hashtag::ActiveModel {
                article_id: ActiveValue::Set(article.id),
                position: ActiveValue::Set(position as i32),
                name: ActiveValue::Set(name),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok(article)
    }
}

/// Creates an article owned by `user_id` with default values.
pub async fn create_article(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::article::Model, DbErr> {
    ArticleFactory::new(db, user_id).build().await
}

/// Inserts a like row for the pair directly, bypassing the service checks.
pub async fn create_article_like(
    db: &DatabaseConnection,
    article_id: i32,
    user_id: i32,
) -> Result<entity::article_like::Model, DbErr> {
    entity::article_like::ActiveModel {
        article_id: ActiveValue::Set(article_id),
        user_id: ActiveValue::Set(user_id),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Inserts a subscribe row for the pair directly, bypassing the service checks.
pub async fn create_article_subscribe(
    db: &DatabaseConnection,
    article_id: i32,
    subscriber_id: i32,
) -> Result<entity::article_subscribe::Model, DbErr> {
    entity::article_subscribe::ActiveModel {
        article_id: ActiveValue::Set(article_id),
        subscriber_id: ActiveValue::Set(subscriber_id),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
