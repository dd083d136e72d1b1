use super::*;

/// Tests registering with an invite creates the user and consumes the invite.
///
/// Expected: user with nickname, invite no longer active
#[tokio::test]
async fn consumes_invite() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_user(db).await?;
    factory::create_invite(db, "ny@bajen.se", &admin.id).await?;

    let user = AuthService::new(db)
        .register(registration("ny@bajen.se", "Söderkis", "hemligt123"))
        .await?;

    assert_eq!(user.email, "ny@bajen.se");
    assert_eq!(
        NicknameRepository::new(db).current_for_user(&user.id).await?,
        Some("Söderkis".to_string())
    );
    assert!(!InviteRepository::new(db).active_exists_for_email("ny@bajen.se").await?);

    let logged_in = AuthService::new(db).login("ny@bajen.se", "hemligt123").await?;
    assert_eq!(logged_in.id, user.id);

    Ok(())
}

/// Tests the bio from the form is stored trimmed, and a blank one is dropped.
///
/// Expected: Some("Bajen sen 1891") for the first, None for the second
#[tokio::test]
async fn stores_bio() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_user(db).await?;
    factory::create_invite(db, "ny@bajen.se", &admin.id).await?;
    factory::create_invite(db, "tyst@bajen.se", &admin.id).await?;

    let mut with_bio = registration("ny@bajen.se", "Söderkis", "hemligt123");
    with_bio.bio = Some("  Bajen sen 1891 ".to_string());
    let mut blank_bio = registration("tyst@bajen.se", "Tyst", "hemligt123");
    blank_bio.bio = Some("   ".to_string());

    let service = AuthService::new(db);
    let first = service.register(with_bio).await?;
    let second = service.register(blank_bio).await?;

    assert_eq!(first.bio.as_deref(), Some("Bajen sen 1891"));
    assert_eq!(second.bio, None);

    Ok(())
}

/// Tests a rejected registration leaves no account behind.
///
/// Expected: Err; no account for the email and the invite still active
#[tokio::test]
async fn failed_registration_writes_nothing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_user(db).await?;
    factory::create_invite(db, "ny@bajen.se", &admin.id).await?;

    let result = AuthService::new(db)
        .register(registration("ny@bajen.se", "   ", "hemligt123"))
        .await;

    assert!(result.is_err());
    assert!(UserRepository::new(db)
        .find_by_email("ny@bajen.se")
        .await?
        .is_none());
    assert!(InviteRepository::new(db).active_exists_for_email("ny@bajen.se").await?);

    Ok(())
}

/// Tests registering without an invite.
///
/// Expected: Err(AppError::BadRequest(NO_INVITE))
#[tokio::test]
async fn requires_invite() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AuthService::new(db)
        .register(registration("okänd@bajen.se", "Okänd", "hemligt123"))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(ref msg)) if msg == NO_INVITE));

    Ok(())
}

/// Tests password rules are checked before the invite.
///
/// Expected: PASSWORDS_DIFFER and PASSWORD_TOO_SHORT rejections
#[tokio::test]
async fn validates_passwords() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = AuthService::new(db);

    let mut differing = registration("ny@bajen.se", "Ny", "hemligt123");
    differing.confirm_password = "hemligt124".to_string();
    let short = registration("ny@bajen.se", "Ny", "kort");

    assert!(matches!(
        service.register(differing).await,
        Err(AppError::BadRequest(ref msg)) if msg == PASSWORDS_DIFFER
    ));
    assert!(matches!(
        service.register(short).await,
        Err(AppError::BadRequest(ref msg)) if msg == PASSWORD_TOO_SHORT
    ));

    Ok(())
}

/// Tests a nickname in use blocks registration and keeps the invite.
///
/// Expected: Err(AppError::BadRequest(NICK_TAKEN)), invite still active
#[tokio::test]
async fn rejects_taken_nick() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_user_with_nick(db, "Bajen").await?;
    factory::create_invite(db, "ny@bajen.se", &admin.id).await?;

    let result = AuthService::new(db)
        .register(registration("ny@bajen.se", "Bajen", "hemligt123"))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(ref msg)) if msg == NICK_TAKEN));
    assert!(InviteRepository::new(db).active_exists_for_email("ny@bajen.se").await?);

    Ok(())
}
