use super::*;

/// Tests reading cooldown status without bumping.
///
/// Expected: status reported and the listing unchanged
#[tokio::test]
async fn status_does_not_write() -> Result<(), AppError> {
    let test = TestBuilder::new().with_listing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let listing = factory::server_listing::ServerListingFactory::new(db)
        .bump_count(1)
        .last_bump_at(Some(now - Duration::minutes(30)))
        .build()
        .await?;

    let service = BumpService::new(db, Duration::hours(2));
    let first = service.status(listing.id, now).await?;
    let second = service.status(listing.id, now).await?;

    assert!(matches!(first, CooldownStatus::CoolingDown { .. }));
    assert_eq!(first, second);

    let stored = entity::prelude::ServerListing::find_by_id(listing.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.bump_count, 1);

    Ok(())
}
