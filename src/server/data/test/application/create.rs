use super::*;

/// Tests storing a submitted application.
///
/// Expected: Ok with representative and tags stored
#[tokio::test]
async fn stores_application() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ApplicationRepository::new(db);
    let application = repo
        .create(SubmitApplicationParam {
            name: "Night Owls".to_string(),
            description: "Late night gaming".to_string(),
            invite_link: "https://discord.gg/owls".to_string(),
            member_count: 80,
            logo_url: None,
            tags: vec!["gaming".to_string()],
            representative_id: 555,
        })
        .await?;

    assert_eq!(application.name, "Night Owls");
    assert_eq!(application.representative_id, 555);
    assert_eq!(application.tags, vec!["gaming"]);

    let found = repo.find_by_id(application.id).await?;
    assert_eq!(found, Some(application));

    Ok(())
}
