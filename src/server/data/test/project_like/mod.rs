use crate::server::data::project_like::ProjectLikeRepository;
use sea_orm::{DbErr, SqlErr};
use test_utils::{builder::TestBuilder, factory};

/// Tests creating a like and finding it again.
///
/// Expected: Ok with the stored pair, exists true only for the liker
#[tokio::test]
async fn creates_and_finds_like() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, project) = factory::helpers::create_project_with_owner(db).await?;
    let liker = factory::create_user(db).await?;

    let repo = ProjectLikeRepository::new(db);
    let created = repo.create(project.id, liker.id).await?;
    let found = repo.find(project.id, liker.id).await?.unwrap();

    assert_eq!(found.id, created.id);
    assert_eq!(found.project_id, project.id);
    assert_eq!(found.user_id, liker.id);
    assert!(repo.exists(project.id, liker.id).await?);
    assert!(!repo.exists(project.id, owner.id).await?);

    Ok(())
}

/// Tests that the unique index covers like pairs.
///
/// Expected: Err with a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_like() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, project) = factory::helpers::create_project_with_owner(db).await?;
    let liker = factory::create_user(db).await?;
    factory::project::create_project_like(db, project.id, liker.id).await?;

    let repo = ProjectLikeRepository::new(db);
    let err = repo.create(project.id, liker.id).await.unwrap_err();

    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}

/// Tests the like, unlike, like cycle.
///
/// Expected: Ok with exactly one row after the second insert
#[tokio::test]
async fn allows_like_after_delete() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, project) = factory::helpers::create_project_with_owner(db).await?;
    let liker = factory::create_user(db).await?;

    let repo = ProjectLikeRepository::new(db);
    let row = repo.create(project.id, liker.id).await?;
    repo.delete(row).await?;
    assert!(repo.count_per_project().await?.is_empty());

    repo.create(project.id, liker.id).await?;

    assert_eq!(repo.count_per_project().await?.get(&project.id), Some(&1));

    Ok(())
}

/// Tests counting likes per project.
///
/// Expected: Ok with projects without likes absent
#[tokio::test]
async fn counts_likes_per_project() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, liked) = factory::helpers::create_project_with_owner(db).await?;
    let unliked = factory::create_project(db, owner.id).await?;
    let other = factory::create_user(db).await?;

    let repo = ProjectLikeRepository::new(db);
    repo.create(liked.id, owner.id).await?;
    repo.create(liked.id, other.id).await?;

    let counts = repo.count_per_project().await?;

    assert_eq!(counts.get(&liked.id), Some(&2));
    assert!(counts.get(&unliked.id).is_none());

    Ok(())
}
