//! Shared helper utilities for factory methods.
//!
//! Provides unique id generation and shortcuts that create a target entity together
//! with its owning user.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user and an article owned by that user.
///
/// # Returns
/// - `Ok((user, article))` - The owner and the article
/// - `Err(DbErr)` - Database error during creation
pub async fn create_article_with_owner(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::article::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let article = crate::factory::article::create_article(db, user.id).await?;

    Ok((user, article))
}

/// Creates a user and a project owned by that user.
///
/// # Returns
/// - `Ok((user, project))` - The owner and the project
/// - `Err(DbErr)` - Database error during creation
pub async fn create_project_with_owner(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::project::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let project = crate::factory::project::create_project(db, user.id).await?;

    Ok((user, project))
}
