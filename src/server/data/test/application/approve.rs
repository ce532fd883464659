use super::*;

/// Tests converting an application into a listing.
///
/// Verifies that the listing carries the application's fields, is owned by the
/// representative, and that the application is removed.
///
/// Expected: Ok(Some(listing)) and no pending applications
#[tokio::test]
async fn converts_application_into_listing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let application = factory::application::ApplicationFactory::new(db)
        .name("Raiders")
        .member_count(300)
        .tags("pve,raids")
        .representative_id("777")
        .build()
        .await?;

    let repo = ApplicationRepository::new(db);
    let listing = repo.approve(application.id).await?.unwrap();

    assert_eq!(listing.name, "Raiders");
    assert_eq!(listing.member_count, 300);
    assert_eq!(listing.tags, vec!["pve", "raids"]);
    assert_eq!(listing.owner_id, Some(777));
    assert_eq!(listing.bump_count, 0);
    assert!(!listing.verified);

    assert_eq!(entity::prelude::Application::find().count(db).await?, 0);
    assert_eq!(entity::prelude::ServerListing::find().count(db).await?, 1);

    Ok(())
}

/// Tests approving an application that does not exist.
///
/// Expected: Ok(None) and no listing created
#[tokio::test]
async fn returns_none_for_missing_application() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ApplicationRepository::new(db);
    assert!(repo.approve(12).await?.is_none());
    assert_eq!(entity::prelude::ServerListing::find().count(db).await?, 0);

    Ok(())
}
