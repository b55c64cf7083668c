use crate::server::data::article_subscribe::ArticleSubscribeRepository;
use sea_orm::{DbErr, SqlErr};
use test_utils::{builder::TestBuilder, factory};

/// Tests creating a subscription and finding it again.
///
/// Expected: Ok with the stored pair, exists true only for the subscriber
#[tokio::test]
async fn creates_and_finds_subscription() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, article) = factory::helpers::create_article_with_owner(db).await?;
    let subscriber = factory::create_user(db).await?;

    let repo = ArticleSubscribeRepository::new(db);
    let created = repo.create(article.id, subscriber.id).await?;
    let found = repo.find(article.id, subscriber.id).await?.unwrap();

    assert_eq!(found.id, created.id);
    assert_eq!(found.article_id, article.id);
    assert_eq!(found.subscriber_id, subscriber.id);
    assert!(repo.exists(article.id, subscriber.id).await?);
    assert!(!repo.exists(article.id, owner.id).await?);

    Ok(())
}

/// Tests that the unique index covers subscriber pairs.
///
/// Expected: Err with a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_subscriber() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, article) = factory::helpers::create_article_with_owner(db).await?;
    let subscriber = factory::create_user(db).await?;
    factory::article::create_article_subscribe(db, article.id, subscriber.id).await?;

    let repo = ArticleSubscribeRepository::new(db);
    let err = repo.create(article.id, subscriber.id).await.unwrap_err();

    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}

/// Tests deleting a subscription.
///
/// Expected: Ok with the pair gone and the article absent from the counts
#[tokio::test]
async fn deletes_subscription() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, article) = factory::helpers::create_article_with_owner(db).await?;
    let subscriber = factory::create_user(db).await?;

    let repo = ArticleSubscribeRepository::new(db);
    let row = repo.create(article.id, subscriber.id).await?;
    repo.delete(row).await?;

    assert!(repo.find(article.id, subscriber.id).await?.is_none());
    assert!(repo.count_per_article().await?.get(&article.id).is_none());

    Ok(())
}

/// Tests counting subscriptions per article.
///
/// Expected: Ok with each article counted separately
#[tokio::test]
async fn counts_subscriptions_per_article() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, first) = factory::helpers::create_article_with_owner(db).await?;
    let second = factory::create_article(db, owner.id).await?;
    let other = factory::create_user(db).await?;

    let repo = ArticleSubscribeRepository::new(db);
    repo.create(first.id, owner.id).await?;
    repo.create(first.id, other.id).await?;
    repo.create(second.id, other.id).await?;

    let counts = repo.count_per_article().await?;

    assert_eq!(counts.get(&first.id), Some(&2));
    assert_eq!(counts.get(&second.id), Some(&1));

    Ok(())
}
