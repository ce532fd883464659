use super::*;

/// Tests rejecting an application by deleting it.
///
/// Expected: Ok(true) then Ok(false) on repeat
#[tokio::test]
async fn deletes_application() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let application = factory::create_application(db).await?;

    let repo = ApplicationRepository::new(db);
    assert!(repo.delete(application.id).await?);
    assert!(!repo.delete(application.id).await?);
    assert_eq!(entity::prelude::Application::find().count(db).await?, 0);

    Ok(())
}
