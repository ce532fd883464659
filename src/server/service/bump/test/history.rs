use super::*;

/// Tests reading the bump history of a listing with several bumps.
///
/// Expected: up to `limit` events, newest first
#[tokio::test]
async fn returns_recent_bumps_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new().with_listing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let listing = factory::create_listing(db).await?;
    let start = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();

    let service = BumpService::new(db, Duration::hours(2));
    for i in 0..3 {
        service
            .bump(param(listing.id), start + Duration::hours(3 * i))
            .await?;
    }

    let history = service.history(listing.id, 2).await?;

    let times: Vec<_> = history.iter().map(|e| e.bumped_at).collect();
    assert_eq!(
        times,
        vec![start + Duration::hours(6), start + Duration::hours(3)]
    );

    Ok(())
}

/// Tests reading the bump history of a listing that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn returns_not_found_for_missing_listing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_listing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = BumpService::new(db, Duration::hours(2));
    let result = service.history(7, 10).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
