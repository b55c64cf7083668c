use super::*;

/// Tests that a non-owner cannot update and nothing changes.
///
/// Expected: Err(AccessDenied) and the stored article unchanged
#[tokio::test]
async fn rejects_update_by_non_owner() -> Result<(), AppError> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let images = RecordingImageStore::default();

    let (_owner, article) = factory::helpers::create_article_with_owner(db).await?;
    let intruder = as_user(factory::create_user(db).await?);

    let service = ArticleService::new(db, &images);
    let params = UpdateArticleParams::from_dto(
        UpdateArticleDto {
            title: Some("Hijacked".to_string()),
            ..Default::default()
        },
        Some(thumbnail("evil.png")),
    )?;
    let result = service.update(article.id, &intruder, params).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(id, _))) if id == intruder.id
    ));
    let stored = service.get_by_id(article.id).await?;
    assert_eq!(stored.title, article.title);
    assert!(images.calls().is_empty());

    Ok(())
}

/// Tests that the owner overwrites exactly the supplied fields.
///
/// Expected: Ok with title and hashtags replaced, content and status kept
#[tokio::test]
async fn owner_updates_supplied_fields_only() -> Result<(), AppError> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let images = RecordingImageStore::default();

    let owner = factory::create_user(db).await?;
    let article = factory::article::ArticleFactory::new(db, owner.id)
        .content("Original content")
        .status(ArticleStatus::Draft)
        .hashtags(["old"])
        .build()
        .await?;

    let params = UpdateArticleParams::from_dto(
        UpdateArticleDto {
            title: Some("New title".to_string()),
            hashtags: Some(vec!["a".to_string(), "b".to_string(), "a".to_string()]),
            ..Default::default()
        },
        None,
    )?;
    let updated = ArticleService::new(db, &images)
        .update(article.id, &as_user(owner), params)
        .await?;

    assert_eq!(updated.id, article.id);
    assert_eq!(updated.title, "New title");
    assert_eq!(updated.hashtags, vec!["a", "b"]);
    assert_eq!(updated.content, "Original content");
    assert_eq!(updated.status, ArticleStatus::Draft);
    assert_eq!(updated.thumbnail_image_uri, "");

    Ok(())
}

/// Tests replacing the thumbnail through the image store.
///
/// Expected: Ok with update_thumbnail called with the previous reference
#[tokio::test]
async fn replaces_thumbnail_with_previous_reference() -> Result<(), AppError> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let images = RecordingImageStore::default();

    let owner = factory::create_user(db).await?;
    let article = factory::article::ArticleFactory::new(db, owner.id)
        .thumbnail_image_uri("/images/article/thumbnail/old.png")
        .build()
        .await?;

    let params =
        UpdateArticleParams::from_dto(UpdateArticleDto::default(), Some(thumbnail("new.png")))?;
    let updated = ArticleService::new(db, &images)
        .update(article.id, &as_user(owner), params)
        .await?;

    assert_eq!(updated.thumbnail_image_uri, "/images/article/thumbnail/new.png");
    assert_eq!(
        images.calls(),
        vec![ImageCall::Update {
            kind: ImageFileType::ArticleThumbnailImage,
            file_name: "new.png".to_string(),
            old_reference: "/images/article/thumbnail/old.png".to_string(),
        }]
    );

    Ok(())
}

/// Tests updating a missing article.
///
/// Expected: Err(AppError::NotFound), distinct from AccessDenied
#[tokio::test]
async fn update_reports_missing_article() -> Result<(), AppError> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let images = RecordingImageStore::default();
    let caller = as_user(factory::create_user(db).await?);

    let result = ArticleService::new(db, &images)
        .update(5, &caller, UpdateArticleParams::default())
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
