use super::*;

/// Tests appending a bump event.
///
/// Expected: Ok with actor, time and source stored
#[tokio::test]
async fn appends_event() -> Result<(), AppError> {
    let test = TestBuilder::new().with_listing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let listing = factory::create_listing(db).await?;
    let bumped_at = Utc.with_ymd_and_hms(2026, 2, 1, 9, 30, 0).unwrap();

    let repo = BumpEventRepository::new(db);
    let event = repo
        .create(listing.id, "123456789", bumped_at, BumpSource::Bot)
        .await?;

    assert_eq!(event.server_id, listing.id);
    assert_eq!(event.actor_id, "123456789");
    assert_eq!(event.bumped_at, bumped_at);
    assert_eq!(event.source, BumpSource::Bot);

    Ok(())
}

/// Tests that an event for a missing listing is rejected by the foreign key.
///
/// Expected: Err
#[tokio::test]
async fn fails_for_missing_listing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_listing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BumpEventRepository::new(db);
    let result = repo
        .create(404, "1", Utc::now(), BumpSource::Manual)
        .await;

    assert!(result.is_err());

    Ok(())
}
