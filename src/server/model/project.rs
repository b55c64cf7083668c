//! Project domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::project::{CreateProjectDto, ProjectDto, ProjectListItemDto, UpdateProjectDto},
    server::{
        error::AppError,
        middleware::auth::Owned,
        model::{
            image::ThumbnailFile,
            validation::{has_char_length, is_not_blank, is_not_blank_if_present, validate, Rule},
        },
    },
};

const TITLE_MAX_CHARS: usize = 30;

const TITLE_REQUIRED: &str = "Project title is required.";
const TITLE_LENGTH: &str = "Project title must be between 1 and 30 characters.";
const DESCRIPTION_REQUIRED: &str = "Project description is required.";

/// A project owned by a user.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub description: String,
    pub thumbnail_image_uri: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    pub fn from_entity(entity: entity::project::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            title: entity.title,
            description: entity.description,
            thumbnail_image_uri: entity.thumbnail_image_uri,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> ProjectDto {
        ProjectDto {
            id: self.id,
            user_id: self.user_id,
            title: self.title,
            description: self.description,
            thumbnail_image_uri: self.thumbnail_image_uri,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl Owned for Project {
    fn owner_id(&self) -> i32 {
        self.user_id
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectWithCounts {
    pub project: Project,
    pub like_count: u64,
    pub subscribe_count: u64,
}

impl ProjectWithCounts {
    pub fn into_dto(self) -> ProjectListItemDto {
        ProjectListItemDto {
            project: self.project.into_dto(),
            like_count: self.like_count,
            subscribe_count: self.subscribe_count,
        }
    }
}

const CREATE_PROJECT_RULES: &[Rule<CreateProjectDto>] = &[
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
        field: "description",
        check: |r| is_not_blank(r.description.as_deref()),
        message: DESCRIPTION_REQUIRED,
    },
    Rule {
        field: "thumbnailImagePath",
        check: |r| r.thumbnail_image_path.is_some(),
        message: "thumbnailImagePath must be \"\" when there is no thumbnail image.",
    },
];

const UPDATE_PROJECT_RULES: &[Rule<UpdateProjectDto>] = &[
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
        field: "description",
        check: |r| is_not_blank_if_present(r.description.as_deref()),
        message: DESCRIPTION_REQUIRED,
    },
];

/// Validated parameters for creating a project.
#[derive(Debug, Clone)]
pub struct CreateProjectParams {
    pub title: String,
    pub description: String,
    pub thumbnail: Option<ThumbnailFile>,
}

impl CreateProjectParams {
    /// Validates the request and converts it into parameters.
    ///
    /// # Returns
    /// - `Ok(CreateProjectParams)` - Request satisfied every rule
    /// - `Err(AppError::Validation)` - Every violated field constraint
    pub fn from_dto(
        dto: CreateProjectDto,
        thumbnail: Option<ThumbnailFile>,
    ) -> Result<Self, AppError> {
        let mut violations = validate(&dto, CREATE_PROJECT_RULES);
        if let Some(file) = &thumbnail {
            violations.extend(file.violations());
        }

        match (dto.title, dto.description) {
            (Some(title), Some(description)) if violations.is_empty() => Ok(Self {
                title,
                description,
                thumbnail,
            }),
            _ => Err(AppError::Validation(violations)),
        }
    }
}

/// Validated parameters for updating a project. `None` fields stay unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateProjectParams {
    pub title: Option<String>,
    pub description: Option<String>,
    pub thumbnail: Option<ThumbnailFile>,
}

impl UpdateProjectParams {
    pub fn from_dto(
        dto: UpdateProjectDto,
        thumbnail: Option<ThumbnailFile>,
    ) -> Result<Self, AppError> {
        let mut violations = validate(&dto, UPDATE_PROJECT_RULES);
        if let Some(file) = &thumbnail {
            violations.extend(file.violations());
        }

        if !violations.is_empty() {
            return Err(AppError::Validation(violations));
        }

        Ok(Self {
            title: dto.title,
            description: dto.description,
            thumbnail,
        })
    }
}

#[derive(Debug, Clone)]
pub struct NewProject {
    pub user_id: i32,
    pub title: String,
    pub description: String,
    pub thumbnail_image_uri: String,
}

#[derive(Debug, Clone, Default)]
pub struct ProjectChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub thumbnail_image_uri: Option<String>,
}
