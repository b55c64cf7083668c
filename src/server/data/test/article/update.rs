use super::*;

/// Tests that only supplied columns change.
///
/// Expected: Ok with title replaced and content, status and hashtags untouched
#[tokio::test]
async fn updates_only_supplied_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_article_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let article = factory::article::ArticleFactory::new(db, user.id)
        .content("original")
        .hashtags(["keep"])
        .build()
        .await?;

    let repo = ArticleRepository::new(db);
    let updated = repo
        .update(
            article.id,
            ArticleChanges {
                title: Some("Renamed".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.id, article.id);
    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.content, "original");
    assert_eq!(updated.status, article.status);
    assert_eq!(updated.hashtags, vec!["keep"]);
    assert!(updated.updated_at >= article.updated_at);

    Ok(())
}

/// Tests replacing the hashtag set.
///
/// Expected: Ok with the old hashtag rows removed and the new ones in order
#[tokio::test]
async fn replaces_hashtags() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_article_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let article = factory::article::ArticleFactory::new(db, user.id)
        .hashtags(["old", "stale"])
        .build()
        .await?;

    let repo = ArticleRepository::new(db);
    let updated = repo
        .update(
            article.id,
            ArticleChanges {
                hashtags: Some(vec!["new".to_string(), "old".to_string()]),
                thumbnail_image_uri: Some("/images/article/thumbnail/cover.png".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.hashtags, vec!["new", "old"]);
    assert_eq!(updated.thumbnail_image_uri, "/images/article/thumbnail/cover.png");

    let rows = entity::prelude::ArticleHashtag::find()
        .filter(entity::article_hashtag::Column::ArticleId.eq(article.id))
        .count(db)
        .await?;
    assert_eq!(rows, 2);

    Ok(())
}

/// Tests updating a missing article.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_unknown_article() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_article_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ArticleRepository::new(db);
    let result = repo.update(42, ArticleChanges::default()).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
