use super::*;

/// Tests creating a listing from validated parameters.
///
/// Verifies that all fields are stored and that a new listing starts with no bumps.
///
/// Expected: Ok with bump_count 0 and last_bump_at None
#[tokio::test]
async fn creates_listing_without_bumps() -> Result<(), AppError> {
    let test = TestBuilder::new().with_listing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ServerListingRepository::new(db);
    let listing = repo.create(create_param("Friendly")).await?;

    assert_eq!(listing.name, "Friendly");
    assert_eq!(listing.bump_count, 0);
    assert_eq!(listing.last_bump_at, None);
    assert_eq!(listing.owner_id, Some(123456789));
    assert_eq!(listing.tags, vec!["gaming", "chill"]);

    let stored = entity::prelude::ServerListing::find_by_id(listing.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.tags, "gaming,chill");
    assert_eq!(stored.owner_id.as_deref(), Some("123456789"));

    Ok(())
}

/// Tests finding a created listing by ID and by guild.
///
/// Expected: Ok(Some) by ID, a single match by guild ID
#[tokio::test]
async fn finds_listing_by_id_and_guild() -> Result<(), AppError> {
    let test = TestBuilder::new().with_listing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ServerListingRepository::new(db);
    let mut param = create_param("Guilded");
    param.guild_id = Some(987654321);
    let listing = repo.create(param).await?;

    let by_id = repo.find_by_id(listing.id).await?;
    assert_eq!(by_id, Some(listing.clone()));

    let by_guild = repo.find_by_guild_id(987654321).await?;
    assert_eq!(by_guild, vec![listing]);

    assert!(repo.find_by_id(listing_missing_id()).await?.is_none());
    assert!(repo.find_by_guild_id(1).await?.is_empty());

    Ok(())
}

/// Tests listing lookups by owner.
///
/// Expected: only the owner's listings, ordered by name
#[tokio::test]
async fn gets_listings_by_owner() -> Result<(), AppError> {
    let test = TestBuilder::new().with_listing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::server_listing::ServerListingFactory::new(db)
        .name("Zeta")
        .owner_id("42")
        .build()
        .await?;
    factory::server_listing::ServerListingFactory::new(db)
        .name("Alpha")
        .owner_id("42")
        .build()
        .await?;
    factory::server_listing::ServerListingFactory::new(db)
        .owner_id("7")
        .build()
        .await?;

    let repo = ServerListingRepository::new(db);
    let owned = repo.get_by_owner(42).await?;

    assert_eq!(owned.len(), 2);
    assert_eq!(owned[0].name, "Alpha");
    assert_eq!(owned[1].name, "Zeta");

    Ok(())
}

fn listing_missing_id() -> i32 {
    9999
}
