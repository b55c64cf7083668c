use super::*;

/// Tests creating an article with ordered hashtags.
///
/// Expected: Ok with every field stored and hashtags in request order
#[tokio::test]
async fn creates_article_with_hashtags() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_article_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = ArticleRepository::new(db);
    let article = repo
        .create(new_article(user.id, &["rust", "axum", "orm"]))
        .await?;

    assert_eq!(article.user_id, user.id);
    assert_eq!(article.title, "Hello");
    assert_eq!(article.content, "World");
    assert_eq!(article.status, ArticleStatus::Published);
    assert_eq!(article.thumbnail_image_uri, "");
    assert_eq!(article.hashtags, vec!["rust", "axum", "orm"]);

    let stored = repo.find_by_id(article.id).await?.unwrap();
    assert_eq!(stored, article);

    Ok(())
}

/// Tests that a failing hashtag insert leaves no article behind.
///
/// Duplicate names violate the (article_id, name) unique index inside the
/// transaction.
///
/// Expected: Err and no article rows
#[tokio::test]
async fn rolls_back_when_hashtags_fail() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = ArticleRepository::new(db);
    let result = repo.create(new_article(user.id, &["dup", "dup"])).await;

    assert!(result.is_err());
    assert_eq!(entity::prelude::Article::find().count(db).await?, 0);

    Ok(())
}

/// Tests that a missing article yields no result.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_article() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_article_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ArticleRepository::new(db);

    assert!(repo.find_by_id(1).await?.is_none());

    Ok(())
}
