use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of the `request` part when creating a project.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectDto {
    pub title: Option<String>,
    pub description: Option<String>,
    /// `""` when no thumbnail image is attached.
    pub thumbnail_image_path: Option<String>,
}

/// Body of the `request` part when updating a project. Absent fields are left unchanged.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectDto {
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDto {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub description: String,
    pub thumbnail_image_uri: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectListItemDto {
    #[serde(flatten)]
    pub project: ProjectDto,
    pub like_count: u64,
    pub subscribe_count: u64,
}

/// Layout of the `multipart/form-data` body of project create requests.
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct CreateProjectFormDto {
    pub request: CreateProjectDto,
    #[schema(value_type = Option<String>, format = Binary)]
    pub thumbnail_image: Option<Vec<u8>>,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct UpdateProjectFormDto {
    pub request: UpdateProjectDto,
    #[schema(value_type = Option<String>, format = Binary)]
    pub thumbnail_image: Option<Vec<u8>>,
}
