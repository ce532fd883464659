use crate::server::{
    error::AppError,
    middleware::session::{AuthSession, CsrfSession},
};
use test_utils::builder::TestBuilder;

/// Tests that a CSRF token can only be taken once.
///
/// Expected: Some(token) then None
#[tokio::test]
async fn csrf_token_is_single_use() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();

    let csrf = CsrfSession::new(session);
    csrf.set_token("state".to_string()).await?;

    assert_eq!(csrf.take_token().await?, Some("state".to_string()));
    assert_eq!(csrf.take_token().await?, None);

    Ok(())
}

/// Tests reading back the stored Discord user.
///
/// Expected: ID and name as stored, admin false by default
#[tokio::test]
async fn stores_user_identity() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();

    let auth = AuthSession::new(session);
    auth.set_user(123, "Name".to_string()).await?;

    assert_eq!(auth.get_user_id().await?, Some(123));
    assert_eq!(auth.get_user_name().await?.as_deref(), Some("Name"));
    assert!(!auth.is_admin().await?);

    Ok(())
}
