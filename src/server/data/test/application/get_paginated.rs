use super::*;

/// Tests paging through pending applications.
///
/// Expected: oldest submissions first with correct totals
#[tokio::test]
async fn pages_oldest_first() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_application(db).await?;
    for _ in 0..4 {
        factory::create_application(db).await?;
    }

    let repo = ApplicationRepository::new(db);
    let page = repo
        .get_paginated(GetApplicationsParam {
            page: 0,
            per_page: 2,
        })
        .await?;

    assert_eq!(page.applications.len(), 2);
    assert_eq!(page.applications[0].id, first.id);
    assert_eq!(page.total, 5);
    assert_eq!(page.total_pages, 3);

    Ok(())
}
