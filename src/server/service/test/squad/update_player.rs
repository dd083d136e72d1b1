use super::*;

fn sell(player: &entity::player::Model, position_ids: Vec<i32>) -> UpdatePlayerParams {
    UpdatePlayerParams {
        id: player.id,
        first_name: player.first_name.clone(),
        last_name: player.last_name.clone(),
        kit_number: player.kit_number,
        is_captain: false,
        is_out_on_loan: false,
        is_here_on_loan: false,
        is_sold: true,
        position_ids,
    }
}

/// Tests selling a player removes it from every favorite list and the squad.
///
/// Expected: no favorite links, player missing from the active listing
#[tokio::test]
async fn selling_removes_favorites() -> Result<(), AppError> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let fan = factory::create_user(db).await?;
    let player = factory::create_player(db).await?;
    let favorite_repo = FavoritePlayerRepository::new(db);
    favorite_repo.connect(&fan.id, player.id).await?;

    let service = SquadService::new(db);
    service.update_player(sell(&player, Vec::new())).await?;

    assert!(favorite_repo.get_by_user(&fan.id).await?.is_none());
    assert!(service.get_players().await?.iter().all(|p| p.id != player.id));

    Ok(())
}

/// Tests the position list is replaced, not appended to.
///
/// Expected: only the new position remains
#[tokio::test]
async fn replaces_positions() -> Result<(), AppError> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let back = factory::create_position(db, "Back").await?;
    let forward = factory::create_position(db, "Anfallare").await?;

    let service = SquadService::new(db);
    service
        .create_player(CreatePlayerParams {
            first_name: "Nikola".to_string(),
            last_name: "Djurdjic".to_string(),
            kit_number: 9,
            is_captain: false,
            is_out_on_loan: false,
            is_here_on_loan: false,
            position_ids: vec![back.id],
        })
        .await?;
    let player = service.get_players().await?.remove(0);

    let mut params = UpdatePlayerParams {
        id: player.id,
        first_name: player.first_name.clone(),
        last_name: player.last_name.clone(),
        kit_number: player.kit_number,
        is_captain: true,
        is_out_on_loan: false,
        is_here_on_loan: false,
        is_sold: false,
        position_ids: vec![forward.id],
    };
    service.update_player(params.clone()).await?;

    let updated = service.get_player(player.id).await?;
    assert!(updated.is_captain);
    assert_eq!(
        updated.positions.iter().map(|p| p.id).collect::<Vec<_>>(),
        vec![forward.id]
    );

    params.id = 404;
    assert!(matches!(
        service.update_player(params).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
