use super::*;

/// Tests a title whose slug is taken answers with a failed result.
///
/// Expected: second create fails with SLUG_TAKEN
#[tokio::test]
async fn duplicate_slug_fails() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let writer = factory::create_user(db).await?;
    let service = ChronicleService::new(db);

    service.create("Söderstadion minns", "Text", &writer.id).await?;
    let second = service.create("Söderstadion Minns", "Annan", &writer.id).await?;

    assert!(!second[0].success);
    assert_eq!(second[0].message, SLUG_TAKEN);

    Ok(())
}

/// Tests an update may keep its own slug.
///
/// Expected: update succeeds, text replaced, updated timestamp set
#[tokio::test]
async fn update_keeps_own_slug() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let writer = factory::create_user(db).await?;
    let service = ChronicleService::new(db);

    service.create("Guldåret", "Första utkastet", &writer.id).await?;
    let chronicle = service.get_all().await?.remove(0);

    let results = service
        .update(chronicle.id, "Guldåret", "Slutversion")
        .await?;

    assert!(results[0].success);
    let updated = service.get_by_slug(&chronicle.slug).await?;
    assert_eq!(updated.text, "Slutversion");
    assert!(updated.updated.is_some());

    Ok(())
}

/// Tests updating a chronicle that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn update_fails_for_unknown_chronicle() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ChronicleService::new(db).update(404, "Titel", "Text").await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
