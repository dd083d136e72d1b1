use super::*;

/// Tests a second invite while the first is unconsumed.
///
/// Expected: Err(AppError::BadRequest), emails compared case insensitively
#[tokio::test]
async fn rejects_duplicate_active_invite() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_user(db).await?;
    let service = InviteService::new(db);

    service.create("ny@bajen.se", &admin.id).await?;
    let result = service.create(" NY@bajen.se ", &admin.id).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert!(service.exists("ny@bajen.se").await?);
    assert_eq!(service.get_all().await?.len(), 1);

    Ok(())
}

/// Tests inviting an email that already has an account.
///
/// Expected: Err(AppError::BadRequest(ACCOUNT_EXISTS))
#[tokio::test]
async fn rejects_registered_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_user(db).await?;

    let result = InviteService::new(db).create(&admin.email, &admin.id).await;

    assert!(matches!(result, Err(AppError::BadRequest(ref msg)) if msg == ACCOUNT_EXISTS));

    Ok(())
}

/// Tests a string without an at sign is not accepted as an email.
///
/// Expected: Err(AppError::BadRequest(INVALID_EMAIL))
#[tokio::test]
async fn rejects_malformed_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_user(db).await?;

    let result = InviteService::new(db).create("inte-en-adress", &admin.id).await;

    assert!(matches!(result, Err(AppError::BadRequest(ref msg)) if msg == INVALID_EMAIL));

    Ok(())
}
