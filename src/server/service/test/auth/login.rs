use super::*;

/// Tests the correct password logs the user in.
///
/// Expected: Ok(user), email matched case insensitively
#[tokio::test]
async fn accepts_correct_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db)
        .email("fan@bajen.se")
        .password_hash(hash_password("grönvitt1891")?)
        .build()
        .await?;

    let logged_in = AuthService::new(db)
        .login("Fan@Bajen.se", "grönvitt1891")
        .await?;

    assert_eq!(logged_in.id, user.id);

    Ok(())
}

/// Tests a wrong password.
///
/// Expected: Err(AuthError::InvalidCredentials)
#[tokio::test]
async fn rejects_wrong_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db)
        .email("fan@bajen.se")
        .password_hash(hash_password("grönvitt1891")?)
        .build()
        .await?;

    let result = AuthService::new(db).login("fan@bajen.se", "fel").await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests an email nobody registered.
///
/// Expected: Err(AuthError::AccountNotFound)
#[tokio::test]
async fn rejects_unknown_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AuthService::new(db).login("ingen@bajen.se", "x").await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccountNotFound(_)))
    ));

    Ok(())
}

/// Tests a secluded user is kept out even with the right password.
///
/// Expected: Err(AuthError::Secluded); an expired seclusion lets the user in
#[tokio::test]
async fn respects_seclusion() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let hash = hash_password("grönvitt1891")?;
    UserFactory::new(db)
        .email("spärrad@bajen.se")
        .password_hash(hash.clone())
        .secluded_until(Utc::now() + Duration::days(7))
        .build()
        .await?;
    UserFactory::new(db)
        .email("fri@bajen.se")
        .password_hash(hash)
        .secluded_until(Utc::now() - Duration::days(1))
        .build()
        .await?;

    let service = AuthService::new(db);

    assert!(matches!(
        service.login("spärrad@bajen.se", "grönvitt1891").await,
        Err(AppError::AuthErr(AuthError::Secluded(_)))
    ));
    assert!(service.login("fri@bajen.se", "grönvitt1891").await.is_ok());

    Ok(())
}
