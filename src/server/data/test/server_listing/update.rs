use super::*;

/// Tests a partial update.
///
/// Verifies that only provided fields change and bump state is untouched.
///
/// Expected: description changed, name and bump_count unchanged
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), AppError> {
    let test = TestBuilder::new().with_listing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let listing = factory::server_listing::ServerListingFactory::new(db)
        .name("Original")
        .bump_count(3)
        .build()
        .await?;

    let repo = ServerListingRepository::new(db);
    let updated = repo
        .update(
            listing.id,
            UpdateListingParam {
                description: Some("Updated".to_string()),
                tags: Some(vec!["pvp".to_string()]),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Original");
    assert_eq!(updated.description, "Updated");
    assert_eq!(updated.tags, vec!["pvp"]);
    assert_eq!(updated.bump_count, 3);

    Ok(())
}

/// Tests clearing nullable fields.
///
/// Expected: owner and guild IDs set to None
#[tokio::test]
async fn clears_nullable_fields() -> Result<(), AppError> {
    let test = TestBuilder::new().with_listing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let listing = factory::server_listing::ServerListingFactory::new(db)
        .owner_id("11")
        .guild_id("22")
        .build()
        .await?;

    let repo = ServerListingRepository::new(db);
    let updated = repo
        .update(
            listing.id,
            UpdateListingParam {
                owner_id: Some(None),
                guild_id: Some(None),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.owner_id, None);
    assert_eq!(updated.guild_id, None);

    Ok(())
}

/// Tests updating a listing that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_listing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_listing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ServerListingRepository::new(db);
    let result = repo.update(1, UpdateListingParam::default()).await?;

    assert!(result.is_none());

    Ok(())
}
