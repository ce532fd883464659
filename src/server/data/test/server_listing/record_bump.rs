use super::*;
use crate::server::error::internal::InternalError;

/// Tests recording a bump when the observed count is current.
///
/// Expected: Ok(true), bump_count + 1 and last_bump_at set to the bump time
#[tokio::test]
async fn records_bump_when_count_matches() -> Result<(), AppError> {
    let test = TestBuilder::new().with_listing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let listing = factory::create_listing_with_bump_count(db, 5).await?;
    let now = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();

    let repo = ServerListingRepository::new(db);
    let written = repo.record_bump(listing.id, 5, now).await?;

    assert!(written);
    let updated = repo.find_by_id(listing.id).await?.unwrap();
    assert_eq!(updated.bump_count, 6);
    assert_eq!(updated.last_bump_at, Some(now));

    Ok(())
}

/// Tests that a stale observed count writes nothing.
///
/// Simulates a concurrent bump that landed between read and write.
///
/// Expected: Ok(false) and the listing unchanged
#[tokio::test]
async fn skips_bump_when_count_changed() -> Result<(), AppError> {
    let test = TestBuilder::new().with_listing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let listing = factory::create_listing_with_bump_count(db, 5).await?;
    let now = Utc::now();

    let repo = ServerListingRepository::new(db);
    assert!(repo.record_bump(listing.id, 5, now).await?);
    assert!(!repo.record_bump(listing.id, 5, now).await?);

    let updated = repo.find_by_id(listing.id).await?.unwrap();
    assert_eq!(updated.bump_count, 6);

    Ok(())
}

/// Tests bumping a listing that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_listing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_listing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ServerListingRepository::new(db);
    assert!(!repo.record_bump(42, 0, Utc::now()).await?);

    Ok(())
}

/// Tests bumping a listing whose count is already at the storage maximum.
///
/// Expected: Err(InternalError::BumpCountOverflow) and the listing unchanged
#[tokio::test]
async fn rejects_bump_past_max_count() -> Result<(), AppError> {
    let test = TestBuilder::new().with_listing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let listing = factory::create_listing_with_bump_count(db, i32::MAX).await?;

    let repo = ServerListingRepository::new(db);
    let result = repo.record_bump(listing.id, i32::MAX, Utc::now()).await;

    assert!(matches!(
        result,
        Err(AppError::InternalErr(InternalError::BumpCountOverflow { count, .. }))
            if count == i32::MAX
    ));
    let stored = repo.find_by_id(listing.id).await?.unwrap();
    assert_eq!(stored.bump_count, i32::MAX);
    assert_eq!(stored.last_bump_at, None);

    Ok(())
}
