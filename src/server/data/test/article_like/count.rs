use super::*;

/// Tests per-article counts across several articles and users.
///
/// Expected: Ok with counts matching the stored rows, articles without likes absent
#[tokio::test]
async fn counts_likes_per_article() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (alice, first) = factory::helpers::create_article_with_owner(db).await?;
    let (bob, second) = factory::helpers::create_article_with_owner(db).await?;
    let (_carol, third) = factory::helpers::create_article_with_owner(db).await?;
    factory::article::create_article_like(db, first.id, alice.id).await?;
    factory::article::create_article_like(db, first.id, bob.id).await?;
    factory::article::create_article_like(db, second.id, alice.id).await?;

    let counts = ArticleLikeRepository::new(db).count_per_article().await?;

    assert_eq!(counts.len(), 2);
    assert_eq!(counts.get(&first.id), Some(&2));
    assert_eq!(counts.get(&second.id), Some(&1));
    assert_eq!(counts.get(&third.id), None);

    Ok(())
}

/// Tests counting with no like rows at all.
///
/// Expected: Ok with an empty map
#[tokio::test]
async fn counts_nothing_without_likes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_article_with_owner(db).await?;

    let counts = ArticleLikeRepository::new(db).count_per_article().await?;

    assert!(counts.is_empty());

    Ok(())
}
