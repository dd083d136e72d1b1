use super::*;

/// Tests a second poll with the same name answers with a failed result.
///
/// Expected: Ok with a single failed SLUG_TAKEN entry, one poll stored
#[tokio::test]
async fn duplicate_slug_fails() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let service = PollService::new(db);

    let first = service
        .create("Årets spelare", alternatives(&["Tankovic", "Fenger"]), &user.id)
        .await?;
    let second = service
        .create("Årets spelare", alternatives(&["Khalili", "Besara"]), &user.id)
        .await?;

    assert!(first[0].success);
    assert!(!second[0].success);
    assert_eq!(second[0].message, SLUG_TAKEN);
    assert_eq!(service.get_all(&user.id).await?.len(), 1);

    Ok(())
}

/// Tests blank alternatives do not count toward the minimum of two.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn requires_two_alternatives() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = PollService::new(db)
        .create("Bästa målet", alternatives(&["Nyman", "  "]), &user.id)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
