use super::*;

/// Tests picking a second favorite replaces the first instead of adding one.
///
/// Expected: only the second player is linked
#[tokio::test]
async fn replaces_existing_favorite() -> Result<(), AppError> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = UserService::new(db);

    let user = factory::create_user(db).await?;
    let first = factory::create_player(db).await?;
    let second = factory::create_player(db).await?;

    service.set_favorite_player(&user.id, first.id).await?;
    service.set_favorite_player(&user.id, second.id).await?;

    let favorite = FavoritePlayerRepository::new(db).get_by_user(&user.id).await?;
    assert_eq!(favorite.map(|p| p.id), Some(second.id));

    let profile = service.get_profile(&user.id).await?;
    assert_eq!(profile.favorite_player.map(|p| p.id), Some(second.id));

    Ok(())
}

/// Tests setting a player that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rejects_unknown_player() -> Result<(), AppError> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = UserService::new(db).set_favorite_player(&user.id, 404).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
