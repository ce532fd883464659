use super::*;

/// Tests counting events per listing.
///
/// Expected: count matches the listing's bump_count
#[tokio::test]
async fn counts_events_for_listing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_listing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (listing, _) =
        factory::helpers::create_listing_with_events(db, 5, Utc::now(), Duration::hours(3))
            .await?;
    factory::helpers::create_listing_with_events(db, 2, Utc::now(), Duration::hours(3)).await?;

    let repo = BumpEventRepository::new(db);
    let count = repo.count_by_server(listing.id).await?;

    assert_eq!(count, listing.bump_count as u64);
    assert_eq!(count, 5);

    Ok(())
}
