use super::*;

/// Tests admin flag passing the admin permission.
///
/// Expected: Ok(SessionUser) with admin=true
#[tokio::test]
async fn grants_access_to_admin() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_listing_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let auth_session = AuthSession::new(session);
    auth_session.set_user(42, "Admin".to_string()).await?;
    auth_session.set_admin(true).await?;

    let user = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await?;

    assert!(user.admin);
    assert_eq!(user.actor_id(), "42");

    Ok(())
}

/// Tests a Discord user without the admin flag.
///
/// Expected: Err(AuthError::AccessDenied) carrying the user ID
#[tokio::test]
async fn denies_access_to_non_admin() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_listing_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session)
        .set_user(987654321, "User".to_string())
        .await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, _))) => {
            assert_eq!(user_id, Some(987654321));
        }
        other => panic!("Expected AccessDenied error, got: {:?}", other),
    }

    Ok(())
}
