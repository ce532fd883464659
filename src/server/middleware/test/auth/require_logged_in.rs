use super::*;

/// Tests a Discord login satisfying the logged in permission.
///
/// Expected: Ok(SessionUser) with the stored identity
#[tokio::test]
async fn grants_access_to_discord_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_listing_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session)
        .set_user(123456789, "Owner".to_string())
        .await?;

    let user = AuthGuard::new(db, session)
        .require(&[Permission::LoggedIn])
        .await?;

    assert_eq!(user.discord_id, Some(123456789));
    assert_eq!(user.name.as_deref(), Some("Owner"));
    assert!(!user.admin);

    Ok(())
}

/// Tests an admin password session without Discord login.
///
/// Expected: Ok(SessionUser) with no Discord ID and admin set
#[tokio::test]
async fn grants_access_to_password_admin() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_listing_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_admin(true).await?;

    let user = AuthGuard::new(db, session)
        .require(&[Permission::LoggedIn])
        .await?;

    assert_eq!(user.discord_id, None);
    assert!(user.admin);

    Ok(())
}

/// Tests an empty session.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn denies_empty_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_listing_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests that logging out removes access.
///
/// Expected: Err(AuthError::UserNotInSession) after clear
#[tokio::test]
async fn denies_after_logout() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_listing_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let auth_session = AuthSession::new(session);
    auth_session.set_user(1, "User".to_string()).await?;
    auth_session.set_admin(true).await?;
    auth_session.clear().await;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::LoggedIn])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}
