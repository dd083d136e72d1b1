use super::*;

/// Tests the Scissor role satisfies the Manager permission.
///
/// Expected: Ok(LoggedInUser)
#[tokio::test]
async fn grants_access_to_scissor() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    let scissor = factory::create_role(db, "Scissor").await?;
    factory::assign_role(db, &user.id, scissor.id).await?;
    AuthSession::new(session).set_user_id(&user.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Manager])
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests an Author is not a Manager.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_to_author() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    let author = factory::create_role(db, "Author").await?;
    factory::assign_role(db, &user.id, author.id).await?;
    AuthSession::new(session).set_user_id(&user.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Manager])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
