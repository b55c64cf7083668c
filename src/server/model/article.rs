//! Article domain models and parameters.
//!
//! Provides the article domain model with its ordered hashtags, the list item carrying
//! current like and subscribe counts, and the validated parameter types for create and
//! update operations.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::ArticleStatus;

use crate::{
    model::article::{
        ArticleDto, ArticleListItemDto, ArticleStatusDto, CreateArticleDto, UpdateArticleDto,
    },
    server::{
        error::AppError,
        middleware::auth::Owned,
        model::{
            image::ThumbnailFile,
            validation::{
                dedup_preserving_order, has_char_length, is_not_blank, is_not_blank_if_present,
                validate, Rule,
            },
        },
    },
};

const TITLE_MAX_CHARS: usize = 30;
const MAX_HASHTAGS: usize = 10;

const TITLE_REQUIRED: &str = "Article title is required.";
const TITLE_LENGTH: &str = "Article title must be between 1 and 30 characters.";
const CONTENT_REQUIRED: &str = "Article content is required.";
const HASHTAGS_LIMIT: &str = "An article can have at most 10 hashtags.";

/// Article with its ordered hashtags.
#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub id: i32,
    /// Id of the owning user.
    pub user_id: i32,
    pub title: String,
    pub content: String,
    pub status: ArticleStatus,
    /// Reference returned by the image store, `""` when there is no thumbnail.
    pub thumbnail_image_uri: String,
    /// Hashtags in insertion order, without duplicates.
    pub hashtags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    /// Converts entity models to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The article row
    /// - `hashtags` - Hashtag rows of the article, in any order
    pub fn from_entity(
        entity: entity::article::Model,
        mut hashtags: Vec<entity::article_hashtag::Model>,
    ) -> Self {
        hashtags.sort_by_key(|h| h.position);

        Self {
            id: entity.id,
            user_id: entity.user_id,
            title: entity.title,
            content: entity.content,
            status: entity.status,
            thumbnail_image_uri: entity.thumbnail_image_uri,
            hashtags: hashtags.into_iter().map(|h| h.name).collect(),
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> ArticleDto {
        ArticleDto {
            id: self.id,
            user_id: self.user_id,
            title: self.title,
            content: self.content,
            status: status_into_dto(self.status),
            thumbnail_image_uri: self.thumbnail_image_uri,
            hashtags: self.hashtags,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl Owned for Article {
    fn owner_id(&self) -> i32 {
        self.user_id
    }
}

/// Article decorated with the number of like and subscribe rows currently present.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleWithCounts {
    pub article: Article,
    pub like_count: u64,
    pub subscribe_count: u64,
}

impl ArticleWithCounts {
    pub fn into_dto(self) -> ArticleListItemDto {
        ArticleListItemDto {
            article: self.article.into_dto(),
            like_count: self.like_count,
            subscribe_count: self.subscribe_count,
        }
    }
}

pub fn status_from_dto(status: ArticleStatusDto) -> ArticleStatus {
    match status {
        ArticleStatusDto::Published => ArticleStatus::Published,
        ArticleStatusDto::Draft => ArticleStatus::Draft,
    }
}

pub fn status_into_dto(status: ArticleStatus) -> ArticleStatusDto {
    match status {
        ArticleStatus::Published => ArticleStatusDto::Published,
        ArticleStatus::Draft => ArticleStatusDto::Draft,
    }
}

const CREATE_ARTICLE_RULES: &[Rule<CreateArticleDto>] = &[
    Rule {
        field: "title",
        check: |r| is_not_blank(r.title.as_deref()),
        message: TITLE_REQUIRED,
    },
    Rule {
        field: "title",
        check: |r| has_char_length(r.title.as_deref(), 1, TITLE_MAX_CHARS),
        message: TITLE_LENGTH,
    },
    Rule {
        field: "content",
        check: |r| is_not_blank(r.content.as_deref()),
        message: CONTENT_REQUIRED,
    },
    Rule {
        field: "hashtags",
        check: |r| r.hashtags.len() <= MAX_HASHTAGS,
        message: HASHTAGS_LIMIT,
    },
    Rule {
        field: "status",
        check: |r| r.status.is_some(),
        message: "Article status is required.",
    },
    Rule {
        field: "thumbnailImagePath",
        check: |r| r.thumbnail_image_path.is_some(),
        message: "thumbnailImagePath must be \"\" when there is no thumbnail image.",
    },
];

const UPDATE_ARTICLE_RULES: &[Rule<UpdateArticleDto>] = &[
    Rule {
        field: "title",
        check: |r| is_not_blank_if_present(r.title.as_deref()),
        message: TITLE_REQUIRED,
    },
    Rule {
        field: "title",
        check: |r| has_char_length(r.title.as_deref(), 1, TITLE_MAX_CHARS),
        message: TITLE_LENGTH,
    },
    Rule {
        field: "content",
        check: |r| is_not_blank_if_present(r.content.as_deref()),
        message: CONTENT_REQUIRED,
    },
    Rule {
        field: "hashtags",
        check: |r| r.hashtags.as_ref().map_or(true, |h| h.len() <= MAX_HASHTAGS),
        message: HASHTAGS_LIMIT,
    },
];

/// Validated parameters for creating an article.
#[derive(Debug, Clone)]
pub struct CreateArticleParams {
    pub title: String,
    pub content: String,
    pub hashtags: Vec<String>,
    pub status: ArticleStatus,
    /// Uploaded thumbnail; `None` stores the `""` sentinel.
    pub thumbnail: Option<ThumbnailFile>,
}

impl CreateArticleParams {
    /// Validates the request and converts it into parameters.
    ///
    /// Duplicate hashtags collapse in first-seen order before the count limit applies.
    ///
    /// # Returns
    /// - `Ok(CreateArticleParams)` - Request satisfied every rule
    /// - `Err(AppError::Validation)` - Every violated field constraint
    pub fn from_dto(
        mut dto: CreateArticleDto,
        thumbnail: Option<ThumbnailFile>,
    ) -> Result<Self, AppError> {
        dto.hashtags = dedup_preserving_order(dto.hashtags);

        let mut violations = validate(&dto, CREATE_ARTICLE_RULES);
        if let Some(file) = &thumbnail {
            violations.extend(file.violations());
        }

        match (dto.title, dto.content, dto.status) {
            (Some(title), Some(content), Some(status)) if violations.is_empty() => Ok(Self {
                title,
                content,
                hashtags: dto.hashtags,
                status: status_from_dto(status),
                thumbnail,
            }),
            _ => Err(AppError::Validation(violations)),
        }
    }
}

/// Validated parameters for updating an article. `None` fields stay unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateArticleParams {
    pub title: Option<String>,
    pub content: Option<String>,
    pub hashtags: Option<Vec<String>>,
    pub status: Option<ArticleStatus>,
    /// Replacement thumbnail; `None` keeps the current one.
    pub thumbnail: Option<ThumbnailFile>,
}

impl UpdateArticleParams {
    /// Validates the supplied fields and converts them into parameters.
    ///
    /// # Returns
    /// - `Ok(UpdateArticleParams)` - Every supplied field satisfied its rules
    /// - `Err(AppError::Validation)` - Every violated field constraint
    pub fn from_dto(
        mut dto: UpdateArticleDto,
        thumbnail: Option<ThumbnailFile>,
    ) -> Result<Self, AppError> {
        dto.hashtags = dto.hashtags.map(dedup_preserving_order);

        let mut violations = validate(&dto, UPDATE_ARTICLE_RULES);
        if let Some(file) = &thumbnail {
            violations.extend(file.violations());
        }

        if !violations.is_empty() {
            return Err(AppError::Validation(violations));
        }

        Ok(Self {
            title: dto.title,
            content: dto.content,
            hashtags: dto.hashtags,
            status: dto.status.map(status_from_dto),
            thumbnail,
        })
    }
}

/// Row values for inserting a new article.
#[derive(Debug, Clone)]
pub struct NewArticle {
    pub user_id: i32,
    pub title: String,
    pub content: String,
    pub status: ArticleStatus,
    pub thumbnail_image_uri: String,
    pub hashtags: Vec<String>,
}

/// Column changes applied to an existing article. `None` leaves a column untouched.
#[derive(Debug, Clone, Default)]
pub struct ArticleChanges {
    pub title: Option<String>,
    pub content: Option<String>,
    pub status: Option<ArticleStatus>,
    pub thumbnail_image_uri: Option<String>,
    /// Replaces the whole hashtag set when supplied.
    pub hashtags: Option<Vec<String>>,
}
