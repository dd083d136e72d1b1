use super::*;

/// Tests a lineup is stored and its id handed back.
///
/// Expected: lineup readable by the returned id with its players
#[tokio::test]
async fn returns_new_lineup_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let formation = factory::create_formation(db, "4-3-3").await?;
    let keeper = factory::create_position(db, "Målvakt").await?;
    let player = factory::create_player(db).await?;

    let service = SquadService::new(db);
    let lineup_id = service
        .create_lineup(CreateLineupParams {
            formation_id: formation.id,
            created_by_user_id: user.id.clone(),
            players: vec![(player.id, keeper.id)],
        })
        .await?;

    let lineup = service.get_lineup(lineup_id).await?;
    assert_eq!(lineup.formation.id, formation.id);
    assert_eq!(lineup.players.len(), 1);
    assert_eq!(lineup.players[0].player.id, player.id);

    Ok(())
}

/// Tests an unknown formation is rejected.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_unknown_formation() -> Result<(), AppError> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = SquadService::new(db)
        .create_lineup(CreateLineupParams {
            formation_id: 404,
            created_by_user_id: user.id,
            players: Vec::new(),
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests a pick with an unknown position is rejected before anything is stored.
///
/// Expected: Err(AppError::BadRequest(INVALID_POSITION)); no lineup rows
#[tokio::test]
async fn rejects_unknown_position() -> Result<(), AppError> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let formation = factory::create_formation(db, "4-3-3").await?;
    let keeper = factory::create_position(db, "Målvakt").await?;
    let first = factory::create_player(db).await?;
    let second = factory::create_player(db).await?;

    let result = SquadService::new(db)
        .create_lineup(CreateLineupParams {
            formation_id: formation.id,
            created_by_user_id: user.id,
            players: vec![(first.id, keeper.id), (second.id, 9999)],
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(ref msg)) if msg == INVALID_POSITION));
    assert!(entity::prelude::Lineup::find().all(db).await?.is_empty());
    assert!(entity::prelude::LineupPlayer::find().all(db).await?.is_empty());

    Ok(())
}
