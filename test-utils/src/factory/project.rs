//! Project factory for creating test project entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test projects with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::project::ProjectFactory;
///
/// let project = ProjectFactory::new(&db, user.id)
///     .title("Spadeworker")
///     .thumbnail_image_uri("/images/project/thumbnail/abc.png")
///     .build()
///     .await?;
/// ```
pub struct ProjectFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    title: String,
    description: String,
    thumbnail_image_uri: String,
}

impl<'a> ProjectFactory<'a> {
    /// Creates a new ProjectFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Project {id}"`
    /// - description: `"Test project description"`
    /// - thumbnail_image_uri: `""`
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            title: format!("Project {}", id),
            description: "Test project description".to_string(),
            thumbnail_image_uri: String::new(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn thumbnail_image_uri(mut self, uri: impl Into<String>) -> Self {
        self.thumbnail_image_uri = uri.into();
        self
    }

    /// Builds and inserts the project entity into the database.
    pub async fn build(self) -> Result<entity::project::Model, DbErr> {
        let now = Utc::now();
        entity::project::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            thumbnail_image_uri: ActiveValue::Set(self.thumbnail_image_uri),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a project owned by `user_id` with default values.
pub async fn create_project(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::project::Model, DbErr> {
    ProjectFactory::new(db, user_id).build().await
}

/// Inserts a like row for the pair directly, bypassing the service checks.
pub async fn create_project_like(
    db: &DatabaseConnection,
    project_id: i32,
    user_id: i32,
) -> Result<entity::project_like::Model, DbErr> {
    entity::project_like::ActiveModel {
        project_id: ActiveValue::Set(project_id),
        user_id: ActiveValue::Set(user_id),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Inserts a subscribe row for the pair directly, bypassing the service checks.
pub async fn create_project_subscribe(
    db: &DatabaseConnection,
    project_id: i32,
    subscriber_id: i32,
) -> Result<entity::project_subscribe::Model, DbErr> {
    entity::project_subscribe::ActiveModel {
        project_id: ActiveValue::Set(project_id),
        subscriber_id: ActiveValue::Set(subscriber_id),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
