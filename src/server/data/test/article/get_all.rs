use super::*;

/// Tests listing articles of several owners with their hashtags.
///
/// Expected: Ok with every article in id order, each with its own hashtags
#[tokio::test]
async fn returns_all_articles_with_their_hashtags() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_article_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;
    let first = factory::article::ArticleFactory::new(db, alice.id)
        .hashtags(["b", "a"])
        .build()
        .await?;
    let second = factory::article::ArticleFactory::new(db, bob.id)
        .status(ArticleStatus::Draft)
        .build()
        .await?;

    let repo = ArticleRepository::new(db);
    let articles = repo.get_all().await?;

    assert_eq!(articles.len(), 2);
    assert_eq!(articles[0].id, first.id);
    assert_eq!(articles[0].hashtags, vec!["b", "a"]);
    assert_eq!(articles[1].id, second.id);
    assert_eq!(articles[1].status, ArticleStatus::Draft);
    assert!(articles[1].hashtags.is_empty());

    Ok(())
}

/// Tests listing with no articles.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_list() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_article_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ArticleRepository::new(db);

    assert!(repo.get_all().await?.is_empty());

    Ok(())
}
