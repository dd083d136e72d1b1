use super::*;

/// Tests admin user successfully passes admin permission check.
///
/// Expected: Ok(LoggedInUser) with the Admin role
#[tokio::test]
async fn grants_access_to_admin_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    let admin = factory::create_role(db, "Admin").await?;
    factory::assign_role(db, &user.id, admin.id).await?;
    AuthSession::new(session).set_user_id(&user.id).await?;

    let logged_in = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await?;

    assert!(logged_in.is_admin());

    Ok(())
}

/// Tests a user with another role is denied admin permission.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_to_non_admin_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    let author = factory::create_role(db, "Author").await?;
    factory::assign_role(db, &user.id, author.id).await?;
    AuthSession::new(session).set_user_id(&user.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(id, _))) => assert_eq!(id, user.id),
        other => panic!("Expected AccessDenied, got: {:?}", other.map(|u| u.user.id)),
    }

    Ok(())
}

/// Tests admins also satisfy the Author permission.
///
/// Expected: Ok(LoggedInUser)
#[tokio::test]
async fn admin_counts_as_author() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    let admin = factory::create_role(db, "Admin").await?;
    factory::assign_role(db, &user.id, admin.id).await?;
    AuthSession::new(session).set_user_id(&user.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Author])
        .await;

    assert!(result.is_ok());

    Ok(())
}
