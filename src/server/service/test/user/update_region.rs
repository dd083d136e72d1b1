use super::*;

/// Tests moving a user to a region that does not exist.
///
/// Expected: Err(AppError::NotFound(REGION_NOT_FOUND))
#[tokio::test]
async fn rejects_unknown_region() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = UserService::new(db).update_region(&user.id, Some(99)).await;

    assert!(matches!(result, Err(AppError::NotFound(ref msg)) if msg == REGION_NOT_FOUND));

    Ok(())
}

/// Tests moving a user that does not exist.
///
/// Expected: Err(AppError::NotFound(USER_NOT_FOUND))
#[tokio::test]
async fn rejects_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserService::new(db).update_region("saknas", None).await;

    assert!(matches!(result, Err(AppError::NotFound(ref msg)) if msg == USER_NOT_FOUND));

    Ok(())
}
