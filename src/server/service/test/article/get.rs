use super::*;

/// Tests listing with counts equal to the present relation rows.
///
/// Expected: Ok with per-article like and subscribe counts
#[tokio::test]
async fn lists_articles_with_current_counts() -> Result<(), AppError> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let images = RecordingImageStore::default();

    let (alice, liked) = factory::helpers::create_article_with_owner(db).await?;
    let (bob, quiet) = factory::helpers::create_article_with_owner(db).await?;
    factory::article::create_article_like(db, liked.id, alice.id).await?;
    factory::article::create_article_like(db, liked.id, bob.id).await?;
    factory::article::create_article_subscribe(db, liked.id, bob.id).await?;

    let listed = ArticleService::new(db, &images).get_all().await?;

    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].article.id, liked.id);
    assert_eq!(listed[0].like_count, 2);
    assert_eq!(listed[0].subscribe_count, 1);
    assert_eq!(listed[1].article.id, quiet.id);
    assert_eq!(listed[1].like_count, 0);
    assert_eq!(listed[1].subscribe_count, 0);

    Ok(())
}

/// Tests fetching a missing article.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn get_by_id_reports_missing_article() -> Result<(), AppError> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let images = RecordingImageStore::default();

    let result = ArticleService::new(db, &images).get_by_id(77).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
