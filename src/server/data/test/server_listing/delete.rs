use super::*;

/// Tests deleting a listing together with its audit trail.
///
/// Expected: Ok(true) and no bump events left for the listing
#[tokio::test]
async fn deletes_listing_and_cascades_events() -> Result<(), AppError> {
    let test = TestBuilder::new().with_listing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (listing, events) = factory::helpers::create_listing_with_events(
        db,
        3,
        Utc::now(),
        Duration::hours(2),
    )
    .await?;
    assert_eq!(events.len(), 3);

    let repo = ServerListingRepository::new(db);
    assert!(repo.delete(listing.id).await?);

    assert!(repo.find_by_id(listing.id).await?.is_none());
    assert_eq!(entity::prelude::BumpEvent::find().count(db).await?, 0);

    Ok(())
}

/// Tests deleting a listing that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_listing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_listing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ServerListingRepository::new(db);
    assert!(!repo.delete(1).await?);

    Ok(())
}
