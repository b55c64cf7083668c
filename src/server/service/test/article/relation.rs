use super::*;

async fn like_rows(db: &sea_orm::DatabaseConnection, article_id: i32) -> u64 {
    entity::prelude::ArticleLike::find()
        .filter(entity::article_like::Column::ArticleId.eq(article_id))
        .count(db)
        .await
        .unwrap()
}

/// Tests registering the same like twice.
///
/// Expected: second call Err(AppError::Conflict) and exactly one row
#[tokio::test]
async fn second_like_conflicts() -> Result<(), AppError> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let images = RecordingImageStore::default();

    let (owner, article) = factory::helpers::create_article_with_owner(db).await?;
    let actor = as_user(owner);

    let service = ArticleService::new(db, &images);
    service.register_like(article.id, &actor).await?;
    let second = service.register_like(article.id, &actor).await;

    assert!(matches!(second, Err(AppError::Conflict(_))));
    assert_eq!(like_rows(db, article.id).await, 1);

    Ok(())
}

/// Tests cancelling a like that does not exist.
///
/// Expected: Err(AppError::NotFound) and other users' likes untouched
#[tokio::test]
async fn cancelling_missing_like_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let images = RecordingImageStore::default();

    let (owner, article) = factory::helpers::create_article_with_owner(db).await?;
    factory::article::create_article_like(db, article.id, owner.id).await?;
    let other = as_user(factory::create_user(db).await?);

    let result = ArticleService::new(db, &images)
        .cancel_like(article.id, &other)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(like_rows(db, article.id).await, 1);

    Ok(())
}

/// Tests the register, cancel, register cycle.
///
/// Expected: every step Ok and one row remaining
#[tokio::test]
async fn like_can_be_registered_again_after_cancel() -> Result<(), AppError> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let images = RecordingImageStore::default();

    let (owner, article) = factory::helpers::create_article_with_owner(db).await?;
    let actor = as_user(owner);

    let service = ArticleService::new(db, &images);
    service.register_like(article.id, &actor).await?;
    service.cancel_like(article.id, &actor).await?;
    service.register_like(article.id, &actor).await?;

    assert_eq!(like_rows(db, article.id).await, 1);

    Ok(())
}

/// Tests liking a missing article.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn like_on_missing_article_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let images = RecordingImageStore::default();
    let actor = as_user(factory::create_user(db).await?);

    let service = ArticleService::new(db, &images);

    assert!(matches!(
        service.register_like(404, &actor).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service.cancel_subscribe(404, &actor).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests that likes and subscriptions are independent relations.
///
/// Expected: Ok for both, duplicate subscribe conflicts, cancel subscribe keeps the like
#[tokio::test]
async fn subscribe_is_independent_of_like() -> Result<(), AppError> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let images = RecordingImageStore::default();

    let (_owner, article) = factory::helpers::create_article_with_owner(db).await?;
    let reader = as_user(factory::create_user(db).await?);

    let service = ArticleService::new(db, &images);
    service.register_like(article.id, &reader).await?;
    service.register_subscribe(article.id, &reader).await?;

    assert!(matches!(
        service.register_subscribe(article.id, &reader).await,
        Err(AppError::Conflict(_))
    ));

    service.cancel_subscribe(article.id, &reader).await?;

    let listed = service.get_all().await?;
    assert_eq!(listed[0].like_count, 1);
    assert_eq!(listed[0].subscribe_count, 0);

    Ok(())
}
