use super::*;

/// Tests a user may act on their own profile.
///
/// Expected: Ok(LoggedInUser)
#[tokio::test]
async fn grants_access_to_self() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    AuthSession::new(session).set_user_id(&user.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::SelfOrAdmin(user.id.clone())])
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests a user may not act on someone else's profile.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_to_other_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    AuthSession::new(session).set_user_id(&user.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::SelfOrAdmin(other.id.clone())])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests an admin may act on anyone's profile.
///
/// Expected: Ok(LoggedInUser)
#[tokio::test]
async fn grants_access_to_admin_for_other_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let admin = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let role = factory::create_role(db, "Admin").await?;
    factory::assign_role(db, &admin.id, role.id).await?;
    AuthSession::new(session).set_user_id(&admin.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::SelfOrAdmin(other.id.clone())])
        .await;

    assert!(result.is_ok());

    Ok(())
}
