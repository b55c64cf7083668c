//! User factory for creating test user entities.
//!
//! Users are normally created through the GitHub OAuth callback; the factory inserts
//! them directly with unique GitHub ids so tests can act as distinct owners.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .github_id(583231)
///     .name("octocat")
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    github_id: i64,
    name: String,
    profile_image_uri: String,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - github_id: auto-incremented counter value
    /// - name: `"User {id}"`
    /// - profile_image_uri: `""`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            github_id: id as i64,
            name: format!("User {}", id),
            profile_image_uri: String::new(),
        }
    }

    /// Sets the GitHub account id for the user.
    pub fn github_id(mut self, github_id: i64) -> Self {
        self.github_id = github_id;
        self
    }

    /// Sets the display name for the user.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the profile image URI for the user.
    pub fn profile_image_uri(mut self, uri: impl Into<String>) -> Self {
        self.profile_image_uri = uri.into();
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            github_id: ActiveValue::Set(self.github_id),
            name: ActiveValue::Set(self.name),
            profile_image_uri: ActiveValue::Set(self.profile_image_uri),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}
