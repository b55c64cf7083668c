//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! Users are created or refreshed on every GitHub login and looked up by internal id when
//! resolving the session.

use crate::server::model::user::{UpsertGithubUserParam, User};
use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Upserts a user identified by their GitHub id.
    ///
    /// Inserts a new user or refreshes the name and avatar of an existing one. The creation
    /// timestamp and internal id of an existing user are preserved.
    ///
    /// # Arguments
    /// - `param` - GitHub id, display name and avatar URI
    ///
    /// # Returns
    /// - `Ok(User)` - The created or updated user
    /// - `Err(DbErr)` - Database error during insert or update
    pub async fn upsert_github(&self, param: UpsertGithubUserParam) -> Result<User, DbErr> {
        let entity = entity::prelude::User::insert(entity::user::ActiveModel {
            github_id: ActiveValue::Set(param.github_id),
            name: ActiveValue::Set(param.name),
            profile_image_uri: ActiveValue::Set(param.profile_image_uri),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::user::Column::GithubId)
                .update_columns([
                    entity::user::Column::Name,
                    entity::user::Column::ProfileImageUri,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by internal id.
    ///
    /// # Arguments
    /// - `user_id` - Internal user id stored in the session
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }
}
