use super::*;

fn param(github_id: i64, name: &str) -> UpsertGithubUserParam {
    UpsertGithubUserParam {
        github_id,
        name: name.to_string(),
        profile_image_uri: format!("https://avatars.example.com/{github_id}"),
    }
}

/// Tests creating a new user on first login.
///
/// Expected: Ok with the GitHub id, name and avatar stored
#[tokio::test]
async fn creates_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.upsert_github(param(4242, "octocat")).await?;

    assert_eq!(user.github_id, 4242);
    assert_eq!(user.name, "octocat");
    assert_eq!(user.profile_image_uri, "https://avatars.example.com/4242");

    Ok(())
}

/// Tests that a repeated login refreshes the profile but keeps the identity.
///
/// Expected: Ok with the same id and creation time, updated name
#[tokio::test]
async fn refreshes_existing_user_on_repeated_login() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let first = repo.upsert_github(param(4242, "octocat")).await?;
    let second = repo.upsert_github(param(4242, "The Octocat")).await?;

    assert_eq!(second.id, first.id);
    assert_eq!(second.created_at, first.created_at);
    assert_eq!(second.name, "The Octocat");

    let rows = entity::prelude::User::find()
        .filter(entity::user::Column::GithubId.eq(4242))
        .all(db)
        .await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "The Octocat");

    Ok(())
}
