use super::*;

/// Tests bio, seclusion and region updates on an existing user.
///
/// Expected: every column updated and each call reports a hit
#[tokio::test]
async fn updates_profile_columns() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let region = entity::region::ActiveModel {
        name: ActiveValue::Set("Söder".to_string()),
        ..Default::default()
    }
    .insert(db)
    .await?;
    let until = Utc::now() + Duration::days(7);

    let repo = UserRepository::new(db);
    assert!(repo.update_bio(&user.id, Some("Bajen sen 1891".to_string())).await?);
    assert!(repo.set_secluded_until(&user.id, Some(until)).await?);
    assert!(repo.set_region(&user.id, Some(region.id)).await?);

    let stored = repo.find_by_id(&user.id).await?.unwrap();

    assert_eq!(stored.bio.as_deref(), Some("Bajen sen 1891"));
    assert_eq!(
        stored.secluded_until.map(|d| d.timestamp()),
        Some(until.timestamp())
    );
    assert_eq!(stored.region_id, Some(region.id));

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db)
        .update_bio("missing", Some("text".to_string()))
        .await?;

    assert!(!result);

    Ok(())
}
