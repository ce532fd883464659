use super::*;

/// Tests reading the audit log newest first.
///
/// Expected: events ordered by bumped_at descending, limited
#[tokio::test]
async fn returns_newest_events_first() -> Result<(), AppError> {
    let test = TestBuilder::new().with_listing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let last = Utc.with_ymd_and_hms(2026, 2, 1, 12, 0, 0).unwrap();
    let (listing, _) =
        factory::helpers::create_listing_with_events(db, 4, last, Duration::hours(2)).await?;
    let other = factory::create_listing(db).await?;
    factory::create_bump_event(db, other.id, last).await?;

    let repo = BumpEventRepository::new(db);
    let events = repo.get_recent_by_server(listing.id, 3).await?;

    assert_eq!(events.len(), 3);
    assert_eq!(events[0].bumped_at, last);
    assert_eq!(events[1].bumped_at, last - Duration::hours(2));
    assert!(events.iter().all(|e| e.server_id == listing.id));

    Ok(())
}

/// Tests reading the audit log of a never-bumped listing.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn returns_empty_for_unbumped_listing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_listing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let listing = factory::create_listing(db).await?;

    let repo = BumpEventRepository::new(db);
    assert!(repo.get_recent_by_server(listing.id, 10).await?.is_empty());

    Ok(())
}
