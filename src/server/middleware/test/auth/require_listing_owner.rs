use super::*;

/// Tests the owner of a listing.
///
/// Expected: Ok(SessionUser)
#[tokio::test]
async fn grants_access_to_owner() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_listing_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let listing = factory::server_listing::ServerListingFactory::new(db)
        .owner_id("555")
        .build()
        .await?;
    AuthSession::new(session)
        .set_user(555, "Owner".to_string())
        .await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::ListingOwner(listing.id)])
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests a logged in user who does not own the listing.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_to_other_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_listing_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let listing = factory::server_listing::ServerListingFactory::new(db)
        .owner_id("555")
        .build()
        .await?;
    AuthSession::new(session)
        .set_user(666, "Someone".to_string())
        .await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::ListingOwner(listing.id)])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(Some(666), _)))
    ));

    Ok(())
}

/// Tests an admin managing a listing they do not own.
///
/// Expected: Ok(SessionUser)
#[tokio::test]
async fn admin_passes_owner_check() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_listing_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let listing = factory::create_listing(db).await?;
    AuthSession::new(session).set_admin(true).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::ListingOwner(listing.id)])
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests an owner check against a listing that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn missing_listing_is_not_found() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_listing_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session)
        .set_user(1, "User".to_string())
        .await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::ListingOwner(404)])
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
