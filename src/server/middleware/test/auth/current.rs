use super::*;

/// Tests an empty session resolves to an anonymous visitor.
///
/// Expected: Ok(None)
#[tokio::test]
async fn anonymous_without_session_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let current = AuthGuard::new(db, session).current().await?;

    assert!(current.is_none());

    Ok(())
}

/// Tests the session user is resolved together with their roles.
///
/// Expected: Ok(Some(user)) with the Author role
#[tokio::test]
async fn resolves_user_and_roles() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    let role = factory::create_role(db, "Author").await?;
    factory::assign_role(db, &user.id, role.id).await?;
    AuthSession::new(session).set_user_id(&user.id).await?;

    let current = AuthGuard::new(db, session).current().await?.unwrap();

    assert_eq!(current.id(), user.id);
    assert_eq!(current.roles, vec!["Author".to_string()]);

    Ok(())
}
