use super::*;

/// Tests the minimal create request without a thumbnail.
///
/// Expected: Ok with owner = caller, thumbnail "" and no image store call
#[tokio::test]
async fn creates_article_owned_by_caller() -> Result<(), AppError> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let images = RecordingImageStore::default();
    let caller = as_user(factory::create_user(db).await?);

    let params = CreateArticleParams::from_dto(create_request("Hello", &[]), None)?;
    let article = ArticleService::new(db, &images)
        .create(&caller, params)
        .await?;

    assert_eq!(article.user_id, caller.id);
    assert_eq!(article.title, "Hello");
    assert_eq!(article.content, "World");
    assert_eq!(article.status, ArticleStatus::Published);
    assert!(article.hashtags.is_empty());
    assert_eq!(article.thumbnail_image_uri, "");
    assert!(images.calls().is_empty());

    Ok(())
}

/// Tests that an attached thumbnail is stored and its reference persisted.
///
/// Expected: Ok with the image store reference on the article
#[tokio::test]
async fn stores_attached_thumbnail() -> Result<(), AppError> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let images = RecordingImageStore::default();
    let caller = as_user(factory::create_user(db).await?);

    let params = CreateArticleParams::from_dto(
        create_request("Hello", &["rust", "axum"]),
        Some(thumbnail("cover.png")),
    )?;
    let article = ArticleService::new(db, &images)
        .create(&caller, params)
        .await?;

    assert_eq!(article.thumbnail_image_uri, "/images/article/thumbnail/cover.png");
    assert_eq!(article.hashtags, vec!["rust", "axum"]);
    assert_eq!(
        images.calls(),
        vec![ImageCall::Save {
            kind: ImageFileType::ArticleThumbnailImage,
            file_name: "cover.png".to_string(),
        }]
    );

    Ok(())
}
