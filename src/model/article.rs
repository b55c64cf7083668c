use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ArticleStatusDto {
    Published,
    Draft,
}

/// Body of the `request` part when creating an article.
///
/// Required fields are optional here so that a missing field is reported as a
/// field violation instead of a deserialization failure.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateArticleDto {
    pub title: Option<String>,
    pub content: Option<String>,
    #[serde(default)]
    pub hashtags: Vec<String>,
    pub status: Option<ArticleStatusDto>,
    /// `""` when no thumbnail image is attached.
    pub thumbnail_image_path: Option<String>,
}

/// Body of the `request` part when updating an article. Absent fields are left unchanged.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateArticleDto {
    pub title: Option<String>,
    pub content: Option<String>,
    pub hashtags: Option<Vec<String>>,
    pub status: Option<ArticleStatusDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDto {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub content: String,
    pub status: ArticleStatusDto,
    pub thumbnail_image_uri: String,
    pub hashtags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleListItemDto {
    #[serde(flatten)]
    pub article: ArticleDto,
    pub like_count: u64,
    pub subscribe_count: u64,
}

/// Layout of the `multipart/form-data` body of article create requests.
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct CreateArticleFormDto {
    /// JSON encoded article fields.
    pub request: CreateArticleDto,
    #[schema(value_type = Option<String>, format = Binary)]
    pub thumbnail_image: Option<Vec<u8>>,
}

/// Layout of the `multipart/form-data` body of article update requests.
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct UpdateArticleFormDto {
    pub request: UpdateArticleDto,
    /// Replaces the current thumbnail when present.
    #[schema(value_type = Option<String>, format = Binary)]
    pub thumbnail_image: Option<Vec<u8>>,
}
