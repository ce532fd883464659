use super::*;

/// Tests writing refreshed invite stats.
///
/// Expected: member count, logo and guild ID updated
#[tokio::test]
async fn updates_member_count_logo_and_guild() -> Result<(), AppError> {
    let test = TestBuilder::new().with_listing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let listing = factory::create_listing(db).await?;

    let repo = ServerListingRepository::new(db);
    let updated = repo
        .refresh_stats(
            listing.id,
            RefreshStatsParam {
                member_count: 512,
                logo_url: Some("https://cdn.discordapp.com/icons/1/abc.png".to_string()),
                guild_id: Some(1),
            },
        )
        .await?;

    assert!(updated);
    let listing = repo.find_by_id(listing.id).await?.unwrap();
    assert_eq!(listing.member_count, 512);
    assert_eq!(
        listing.logo_url.as_deref(),
        Some("https://cdn.discordapp.com/icons/1/abc.png")
    );
    assert_eq!(listing.guild_id, Some(1));

    Ok(())
}

/// Tests that a refresh without a logo keeps the stored one.
///
/// Expected: member count updated, logo unchanged
#[tokio::test]
async fn keeps_logo_when_refresh_has_none() -> Result<(), AppError> {
    let test = TestBuilder::new().with_listing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let listing = factory::create_listing(db).await?;
    let repo = ServerListingRepository::new(db);
    repo.update(
        listing.id,
        UpdateListingParam {
            logo_url: Some(Some("https://example.com/logo.png".to_string())),
            ..Default::default()
        },
    )
    .await?;

    repo.refresh_stats(
        listing.id,
        RefreshStatsParam {
            member_count: 10,
            logo_url: None,
            guild_id: None,
        },
    )
    .await?;

    let listing = repo.find_by_id(listing.id).await?.unwrap();
    assert_eq!(listing.member_count, 10);
    assert_eq!(
        listing.logo_url.as_deref(),
        Some("https://example.com/logo.png")
    );

    Ok(())
}

/// Tests gateway member count updates by guild.
///
/// Verifies that only auto-updating listings for the guild are touched.
///
/// Expected: Ok(1)
#[tokio::test]
async fn updates_member_count_by_guild_for_auto_update_only() -> Result<(), AppError> {
    let test = TestBuilder::new().with_listing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let auto = factory::server_listing::ServerListingFactory::new(db)
        .guild_id("555")
        .auto_update(true)
        .build()
        .await?;
    let manual = factory::server_listing::ServerListingFactory::new(db)
        .guild_id("555")
        .auto_update(false)
        .build()
        .await?;

    let repo = ServerListingRepository::new(db);
    let updated = repo.update_member_count_by_guild(555, 900).await?;

    assert_eq!(updated, 1);
    assert_eq!(repo.find_by_id(auto.id).await?.unwrap().member_count, 900);
    assert_eq!(
        repo.find_by_id(manual.id).await?.unwrap().member_count,
        manual.member_count
    );

    let auto_listings = repo.get_auto_update().await?;
    assert_eq!(auto_listings.len(), 1);
    assert_eq!(auto_listings[0].id, auto.id);

    Ok(())
}
