use super::*;

/// Tests resolving the user stored in the session.
///
/// Expected: Ok(User) matching the stored id
#[tokio::test]
async fn returns_user_from_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::UserFactory::new(db)
        .name("octocat")
        .build()
        .await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let current = AuthGuard::new(db, session).current_user().await?;

    assert_eq!(current.id, user.id);
    assert_eq!(current.name, "octocat");

    Ok(())
}

/// Tests that an empty session is unauthenticated.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn fails_without_user_in_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).current_user().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests a session that references a user who no longer exists.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn fails_when_session_user_is_missing() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_user_id(404).await?;

    let result = AuthGuard::new(db, session).current_user().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(404)))
    ));

    Ok(())
}

/// Tests that clearing the session logs the user out.
///
/// Expected: Err(AuthError::UserNotInSession) after clear
#[tokio::test]
async fn clear_logs_user_out() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(user.id).await?;
    auth_session.clear().await;

    assert_eq!(auth_session.get_user_id().await?, None);
    assert!(AuthGuard::new(db, session).current_user().await.is_err());

    Ok(())
}
