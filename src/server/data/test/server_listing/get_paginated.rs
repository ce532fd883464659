use super::*;

/// Tests directory ordering.
///
/// Verifies that the most recently bumped listing comes first and never-bumped
/// listings come last.
///
/// Expected: [recent, older, never bumped]
#[tokio::test]
async fn orders_by_most_recent_bump() -> Result<(), AppError> {
    let test = TestBuilder::new().with_listing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let never = factory::create_listing(db).await?;
    let older = factory::server_listing::ServerListingFactory::new(db)
        .last_bump_at(Some(now - Duration::hours(5)))
        .bump_count(1)
        .build()
        .await?;
    let recent = factory::server_listing::ServerListingFactory::new(db)
        .last_bump_at(Some(now - Duration::minutes(10)))
        .bump_count(1)
        .build()
        .await?;

    let repo = ServerListingRepository::new(db);
    let page = repo
        .get_paginated(GetListingsParam {
            page: 0,
            per_page: 10,
        })
        .await?;

    let ids: Vec<i32> = page.listings.iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![recent.id, older.id, never.id]);
    assert_eq!(page.total, 3);
    assert_eq!(page.total_pages, 1);

    Ok(())
}

/// Tests pagination metadata across several pages.
///
/// Expected: 2 items on the last page of 3
#[tokio::test]
async fn paginates_results() -> Result<(), AppError> {
    let test = TestBuilder::new().with_listing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..12 {
        factory::create_listing(db).await?;
    }

    let repo = ServerListingRepository::new(db);
    let page = repo
        .get_paginated(GetListingsParam {
            page: 2,
            per_page: 5,
        })
        .await?;

    assert_eq!(page.listings.len(), 2);
    assert_eq!(page.total, 12);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.page, 2);

    Ok(())
}
