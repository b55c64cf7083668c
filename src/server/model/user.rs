//! User domain models and parameters.
//!
//! Users are authenticated through GitHub OAuth; they own articles and projects and act
//! as the actor of like and subscribe operations.

use chrono::{DateTime, Utc};

use crate::model::user::UserDto;

/// An authenticated platform user.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Internal user id referenced by ownership and relation rows.
    pub id: i32,
    /// GitHub account id the user logged in with.
    pub github_id: i64,
    /// Display name of the user.
    pub name: String,
    /// Avatar URI reported by GitHub, `""` when unknown.
    pub profile_image_uri: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            profile_image_uri: self.profile_image_uri,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            github_id: entity.github_id,
            name: entity.name,
            profile_image_uri: entity.profile_image_uri,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for upserting a user after a successful GitHub login.
///
/// The GitHub id identifies the user; name and avatar are refreshed on every login.
#[derive(Debug, Clone)]
pub struct UpsertGithubUserParam {
    pub github_id: i64,
    pub name: String,
    pub profile_image_uri: String,
}
