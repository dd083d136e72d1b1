use super::*;

/// Tests a secluded user shows the end date on the profile.
///
/// Expected: secluded_until set to the given instant
#[tokio::test]
async fn stores_seclusion_end() -> Result<(), AppError> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = UserService::new(db);

    let user = factory::create_user(db).await?;
    let until = Utc::now() + Duration::days(14);

    let results = service.seclude(&user.id, until).await?;

    assert!(results[0].success);
    assert_eq!(
        service
            .get_profile(&user.id)
            .await?
            .secluded_until
            .map(|d| d.timestamp()),
        Some(until.timestamp())
    );

    Ok(())
}

/// Tests secluding a user that does not exist.
///
/// Expected: Err(AppError::NotFound(USER_NOT_FOUND))
#[tokio::test]
async fn rejects_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserService::new(db)
        .seclude("saknas", Utc::now() + Duration::days(1))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(ref msg)) if msg == USER_NOT_FOUND));

    Ok(())
}
