use super::*;

/// Tests the profile splits the newest nickname from the older ones.
///
/// Expected: nick is the latest, previous nicks hold the first one
#[tokio::test]
async fn resolves_current_and_previous_nicks() -> Result<(), AppError> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = UserService::new(db);

    let user = factory::create_user_with_nick(db, "Förste").await?;
    service.add_nick(&user.id, "Andre").await?;

    let profile = service.get_profile(&user.id).await?;

    assert_eq!(profile.nick.as_deref(), Some("Andre"));
    assert_eq!(profile.previous_nicks, vec!["Förste".to_string()]);
    assert_eq!(profile.number_of_posts, 0);
    assert_eq!(profile.filter.posts_per_page, 10);

    Ok(())
}

/// Tests an unknown user id.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserService::new(db).get_profile("nobody").await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
