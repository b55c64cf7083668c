//! Article business logic.
//!
//! `ArticleService` validates nothing itself; it receives already validated parameters and
//! enforces the rules that need storage: existence of the article, ownership before every
//! mutation, and at most one like and one subscription per (article, user) pair.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        article::ArticleRepository, article_like::ArticleLikeRepository,
        article_subscribe::ArticleSubscribeRepository,
    },
    error::AppError,
    middleware::auth::ensure_owner,
    model::{
        article::{
            Article, ArticleChanges, ArticleWithCounts, CreateArticleParams, NewArticle,
            UpdateArticleParams,
        },
        image::ImageFileType,
        user::User,
    },
    service::{
        image::ImageStore,
        lookup_error,
        relation::{RelationKind, RelationRef},
    },
};

const THUMBNAIL: ImageFileType = ImageFileType::ArticleThumbnailImage;

pub struct ArticleService<'a, S: ImageStore> {
    db: &'a DatabaseConnection,
    images: &'a S,
}

impl<'a, S: ImageStore> ArticleService<'a, S> {
    /// Creates a new ArticleService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `images` - Store receiving uploaded thumbnails
    pub fn new(db: &'a DatabaseConnection, images: &'a S) -> Self {
        Self { db, images }
    }

    /// Gets every article with its current like and subscription counts.
    pub async fn get_all(&self) -> Result<Vec<ArticleWithCounts>, AppError> {
        let articles = ArticleRepository::new(self.db).get_all().await?;
        let likes = ArticleLikeRepository::new(self.db).count_per_article().await?;
        let subscribes = ArticleSubscribeRepository::new(self.db)
            .count_per_article()
            .await?;

        Ok(articles
            .into_iter()
            .map(|article| ArticleWithCounts {
                like_count: likes.get(&article.id).copied().unwrap_or(0),
                subscribe_count: subscribes.get(&article.id).copied().unwrap_or(0),
                article,
            })
            .collect())
    }

    /// Gets an article by id.
    ///
    /// # Returns
    /// - `Ok(Article)` - The article with its hashtags
    /// - `Err(AppError::NotFound)` - No article with that id
    pub async fn get_by_id(&self, id: i32) -> Result<Article, AppError> {
        ArticleRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Article {} not found", id)))
    }

    /// Creates an article owned by `actor`.
    ///
    /// The attached thumbnail, if any, is stored first and its reference saved on the
    /// article; without one the thumbnail reference is `""`.
    pub async fn create(
        &self,
        actor: &User,
        params: CreateArticleParams,
    ) -> Result<Article, AppError> {
        let thumbnail_image_uri = match &params.thumbnail {
            Some(file) => self.images.save_thumbnail(THUMBNAIL, file).await?,
            None => String::new(),
        };

        let article = ArticleRepository::new(self.db)
            .create(NewArticle {
                user_id: actor.id,
                title: params.title,
                content: params.content,
                status: params.status,
                thumbnail_image_uri,
                hashtags: params.hashtags,
            })
            .await?;

        tracing::debug!("User {} created article {}", actor.id, article.id);

        Ok(article)
    }

    /// Updates the supplied fields of an article owned by `actor`.
    ///
    /// # Returns
    /// - `Ok(Article)` - The updated article, same id
    /// - `Err(AppError::NotFound)` - No article with that id
    /// - `Err(AppError::AuthErr(AccessDenied))` - `actor` is not the owner; nothing changes
    pub async fn update(
        &self,
        id: i32,
        actor: &User,
        params: UpdateArticleParams,
    ) -> Result<Article, AppError> {
        let article = self.get_by_id(id).await?;
        ensure_owner(actor, &article, &format!("update article {}", id))?;

        let mut changes = ArticleChanges {
            title: params.title,
            content: params.content,
            status: params.status,
            hashtags: params.hashtags,
            thumbnail_image_uri: None,
        };

        let db = self.db;
        match &params.thumbnail {
            Some(file) => {
                self.images
                    .update_thumbnail(
                        THUMBNAIL,
                        file,
                        &article.thumbnail_image_uri,
                        |uri| async move {
                            changes.thumbnail_image_uri = Some(uri);
                            ArticleRepository::new(db)
                                .update(id, changes)
                                .await
                                .map_err(lookup_error)
                        },
                    )
                    .await
            }
            None => ArticleRepository::new(db)
                .update(id, changes)
                .await
                .map_err(lookup_error),
        }
    }

    /// Records that `actor` likes the article.
    ///
    /// # Returns
    /// - `Ok(())` - Like stored
    /// - `Err(AppError::NotFound)` - No article with that id
    /// - `Err(AppError::Conflict)` - The like already exists
    pub async fn register_like(&self, id: i32, actor: &User) -> Result<(), AppError> {
        self.get_by_id(id).await?;
        let relation = relation(RelationKind::Like, id, actor);

        let repo = ArticleLikeRepository::new(self.db);
        if repo.exists(id, actor.id).await? {
            return Err(relation.conflict());
        }

        repo.create(id, actor.id)
            .await
            .map_err(|e| relation.insert_error(e))?;

        Ok(())
    }

    /// Removes the like of `actor` from the article.
    ///
    /// # Returns
    /// - `Ok(())` - Like removed
    /// - `Err(AppError::NotFound)` - No article with that id, or no like to remove
    pub async fn cancel_like(&self, id: i32, actor: &User) -> Result<(), AppError> {
        self.get_by_id(id).await?;

        let repo = ArticleLikeRepository::new(self.db);
        let Some(like) = repo.find(id, actor.id).await? else {
            return Err(relation(RelationKind::Like, id, actor).not_found());
        };

        repo.delete(like).await?;

        Ok(())
    }

    /// Subscribes `actor` to the article.
    pub async fn register_subscribe(&self, id: i32, actor: &User) -> Result<(), AppError> {
        self.get_by_id(id).await?;
        let relation = relation(RelationKind::Subscribe, id, actor);

        let repo = ArticleSubscribeRepository::new(self.db);
        if repo.exists(id, actor.id).await? {
            return Err(relation.conflict());
        }

        repo.create(id, actor.id)
            .await
            .map_err(|e| relation.insert_error(e))?;

        Ok(())
    }

    /// Removes the subscription of `actor` from the article.
    pub async fn cancel_subscribe(&self, id: i32, actor: &User) -> Result<(), AppError> {
        self.get_by_id(id).await?;

        let repo = ArticleSubscribeRepository::new(self.db);
        let Some(subscribe) = repo.find(id, actor.id).await? else {
            return Err(relation(RelationKind::Subscribe, id, actor).not_found());
        };

        repo.delete(subscribe).await?;

        Ok(())
    }
}

fn relation(kind: RelationKind, article_id: i32, actor: &User) -> RelationRef {
    RelationRef {
        kind,
        target: "article",
        target_id: article_id,
        user_id: actor.id,
    }
}
