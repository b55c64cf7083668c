//! Current-user resolution and ownership checks.
//!
//! `AuthGuard` turns the session into an authenticated `User`. Ownership of articles and
//! projects is expressed through the `Owned` trait so one pure check serves every
//! mutable target.

use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
};

/// An entity with a single owning user.
pub trait Owned {
    fn owner_id(&self) -> i32;
}

/// Returns whether `actor` owns `entity`.
pub fn is_owner<T: Owned + ?Sized>(actor: &User, entity: &T) -> bool {
    entity.owner_id() == actor.id
}

/// Fails with `AuthError::AccessDenied` unless `actor` owns `entity`.
///
/// # Arguments
/// - `actor` - The authenticated user attempting the mutation
/// - `entity` - The target of the mutation
/// - `action` - Description of the attempted action, used in logs
///
/// # Returns
/// - `Ok(())` - Actor is the owner
/// - `Err(AppError::AuthErr(AuthError::AccessDenied))` - Actor is not the owner
pub fn ensure_owner<T: Owned + ?Sized>(
    actor: &User,
    entity: &T,
    action: &str,
) -> Result<(), AppError> {
    if is_owner(actor, entity) {
        return Ok(());
    }

    Err(AuthError::AccessDenied(
        actor.id,
        format!(
            "attempted to {} owned by user {}",
            action,
            entity.owner_id()
        ),
    )
    .into())
}

/// Resolves the authenticated user of a request.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Returns the user whose id is stored in the session.
    ///
    /// # Returns
    /// - `Ok(User)` - The logged-in user
    /// - `Err(AuthError::UserNotInSession)` - Nobody is logged in
    /// - `Err(AuthError::UserNotInDatabase)` - The session references a deleted user
    /// - `Err(AppError)` - Session or database failure
    pub async fn current_user(&self) -> Result<User, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        Ok(user)
    }
}
