use super::*;

/// Tests a lineup comes back with its formation and (player, position) pairs.
///
/// Expected: formation 4-3-3 and both picks in insertion order
#[tokio::test]
async fn flattens_players_and_positions() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let keeper = factory::create_position(db, "Målvakt").await?;
    let striker = factory::create_position(db, "Anfallare").await?;
    let formation = factory::create_formation(db, "4-3-3").await?;
    let first = factory::create_player(db).await?;
    let second = factory::create_player(db).await?;
    let created = factory::create_lineup(
        db,
        formation.id,
        &user.id,
        &[(first.id, keeper.id), (second.id, striker.id)],
    )
    .await?;

    let lineup = LineupRepository::new(db)
        .get_by_id(created.id)
        .await?
        .unwrap();

    assert_eq!(lineup.formation.name, "4-3-3");
    assert_eq!(lineup.players.len(), 2);
    assert_eq!(lineup.players[0].player.id, first.id);
    assert_eq!(lineup.players[0].position.name, "Målvakt");
    assert_eq!(lineup.players[1].position.name, "Anfallare");

    Ok(())
}

/// Tests lookups by post and by creator.
///
/// Expected: the linked lineup for the post; the user's lineups newest first
#[tokio::test]
async fn finds_lineups_by_post_and_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let formation = factory::create_formation(db, "4-4-2").await?;
    let older = factory::create_lineup(db, formation.id, &user.id, &[]).await?;
    let newer = factory::create_lineup(db, formation.id, &user.id, &[]).await?;
    let post = factory::create_post(db, &user.id).await?;

    factory::connect_lineup(db, post.id, older.id).await?;

    let repo = LineupRepository::new(db);

    assert_eq!(repo.get_by_post(post.id).await?.map(|l| l.id), Some(older.id));
    let ids: Vec<i32> = repo
        .get_by_user(&user.id)
        .await?
        .iter()
        .map(|l| l.id)
        .collect();
    assert_eq!(ids, vec![newer.id, older.id]);

    Ok(())
}

/// Tests a failing pick insert rolls back the lineup row as well.
///
/// The schema lacks the lineup player table, so the first pick fails.
///
/// Expected: Err; no lineup rows
#[tokio::test]
async fn failed_pick_rolls_back_lineup() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_table(entity::prelude::Formation)
        .with_table(entity::prelude::Lineup)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let formation = factory::create_formation(db, "4-3-3").await?;

    let result = LineupRepository::new(db)
        .create(CreateLineupParams {
            formation_id: formation.id,
            created_by_user_id: user.id,
            players: vec![(1, 1)],
        })
        .await;

    assert!(result.is_err());
    assert!(entity::prelude::Lineup::find().all(db).await?.is_empty());

    Ok(())
}
