use super::*;

/// Tests a region name can only be used once.
///
/// Expected: second create fails with REGION_EXISTS, one region stored
#[tokio::test]
async fn duplicate_name_fails() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = RegionService::new(db);

    let first = service.create("Södermalm").await?;
    let second = service.create(" Södermalm ").await?;

    assert!(first[0].success);
    assert!(!second[0].success);
    assert_eq!(second[0].message, REGION_EXISTS);
    assert_eq!(service.get_all().await?.len(), 1);

    Ok(())
}

/// Tests a blank name is rejected.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_blank_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = RegionService::new(db).create("").await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
