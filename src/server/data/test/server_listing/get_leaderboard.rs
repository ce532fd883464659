use super::*;

/// Tests ranking listings by bump count.
///
/// Verifies that Leaderboard(2) over counts [3, 7, 1] returns the listings with
/// 7 and 3 bumps, in that order.
///
/// Expected: Ok with counts [7, 3]
#[tokio::test]
async fn returns_top_n_by_bump_count() -> Result<(), AppError> {
    let test = TestBuilder::new().with_listing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_listing_with_bump_count(db, 3).await?;
    factory::create_listing_with_bump_count(db, 7).await?;
    factory::create_listing_with_bump_count(db, 1).await?;

    let repo = ServerListingRepository::new(db);
    let leaderboard = repo.get_leaderboard(2).await?;

    let counts: Vec<i32> = leaderboard.iter().map(|l| l.bump_count).collect();
    assert_eq!(counts, vec![7, 3]);

    Ok(())
}

/// Tests that equal bump counts keep storage order.
///
/// Expected: tied listings ordered by ascending ID
#[tokio::test]
async fn breaks_ties_by_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_listing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_listing_with_bump_count(db, 4).await?;
    let second = factory::create_listing_with_bump_count(db, 4).await?;

    let repo = ServerListingRepository::new(db);
    let leaderboard = repo.get_leaderboard(10).await?;

    assert_eq!(leaderboard.len(), 2);
    assert_eq!(leaderboard[0].id, first.id);
    assert_eq!(leaderboard[1].id, second.id);

    Ok(())
}

/// Tests the leaderboard over an empty directory and with a zero limit.
///
/// Expected: Ok(empty) in both cases
#[tokio::test]
async fn returns_empty_when_no_listings_or_zero_limit() -> Result<(), AppError> {
    let test = TestBuilder::new().with_listing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ServerListingRepository::new(db);
    assert!(repo.get_leaderboard(10).await?.is_empty());

    factory::create_listing_with_bump_count(db, 2).await?;
    assert!(repo.get_leaderboard(0).await?.is_empty());

    Ok(())
}
