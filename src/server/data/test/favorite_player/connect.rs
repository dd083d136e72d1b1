use super::*;

/// Tests a connected player is returned for the user.
///
/// Expected: Ok(Some(player))
#[tokio::test]
async fn connects_player_to_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let player = factory::create_player(db).await?;

    let repo = FavoritePlayerRepository::new(db);
    repo.connect(&user.id, player.id).await?;

    assert_eq!(repo.get_by_user(&user.id).await?.map(|p| p.id), Some(player.id));

    Ok(())
}

/// Tests removing by player clears every user's link to it.
///
/// Expected: two links removed, none left
#[tokio::test]
async fn delete_by_player_clears_all_links() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;
    let player = factory::create_player(db).await?;

    let repo = FavoritePlayerRepository::new(db);
    repo.connect(&first.id, player.id).await?;
    repo.connect(&second.id, player.id).await?;

    let removed = repo.delete_by_player(player.id).await?;

    assert_eq!(removed, 2);
    assert!(repo.get_by_user(&first.id).await?.is_none());
    assert!(!repo.delete_by_user(&second.id).await?);

    Ok(())
}
