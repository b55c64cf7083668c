use super::*;

/// Tests deleting a found like.
///
/// Expected: Ok and the pair no longer exists
#[tokio::test]
async fn deletes_found_like() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, article) = factory::helpers::create_article_with_owner(db).await?;
    factory::article::create_article_like(db, article.id, owner.id).await?;

    let repo = ArticleLikeRepository::new(db);
    let like = repo.find(article.id, owner.id).await?.unwrap();
    repo.delete(like).await?;

    assert!(repo.find(article.id, owner.id).await?.is_none());
    assert_eq!(entity::prelude::ArticleLike::find().count(db).await?, 0);

    Ok(())
}

/// Tests that deleting an article removes its likes.
///
/// Expected: Ok with no orphaned like rows
#[tokio::test]
async fn cascades_article_delete_to_likes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, article) = factory::helpers::create_article_with_owner(db).await?;
    factory::article::create_article_like(db, article.id, owner.id).await?;

    entity::prelude::Article::delete_by_id(article.id)
        .exec(db)
        .await?;

    assert_eq!(entity::prelude::ArticleLike::find().count(db).await?, 0);

    Ok(())
}
