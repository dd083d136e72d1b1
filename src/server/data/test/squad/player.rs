use super::*;

/// Tests sold players are left out and the rest are ordered by last name.
///
/// Expected: [Andersson, Berg]
#[tokio::test]
async fn get_active_skips_sold_players() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::player::PlayerFactory::new(db)
        .name("Kalle", "Berg")
        .build()
        .await?;
    factory::player::PlayerFactory::new(db)
        .name("Olle", "Andersson")
        .build()
        .await?;
    factory::player::PlayerFactory::new(db)
        .name("Sven", "Såld")
        .sold(true)
        .build()
        .await?;

    let players = PlayerRepository::new(db).get_active().await?;
    let names: Vec<&str> = players.iter().map(|p| p.last_name.as_str()).collect();

    assert_eq!(names, vec!["Andersson", "Berg"]);

    Ok(())
}

/// Tests created players carry their positions and count lineup picks.
///
/// Expected: two positions; picked in one lineup
#[tokio::test]
async fn attaches_positions_and_lineup_count() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let keeper = factory::create_position(db, "Målvakt").await?;
    let back = factory::create_position(db, "Mittback").await?;
    let formation = factory::create_formation(db, "4-4-2").await?;

    let repo = PlayerRepository::new(db);
    let created = repo
        .create(CreatePlayerParams {
            first_name: "Rami".to_string(),
            last_name: "Shaaban".to_string(),
            kit_number: 1,
            is_captain: false,
            is_out_on_loan: false,
            is_here_on_loan: false,
            position_ids: vec![keeper.id, back.id, keeper.id],
        })
        .await?;
    factory::create_lineup(db, formation.id, &user.id, &[(created.id, keeper.id)]).await?;

    let player = repo.get_by_id(created.id).await?.unwrap();

    assert_eq!(player.positions.len(), 2);
    assert_eq!(player.in_number_of_starting_elevens, 1);

    Ok(())
}

/// Tests an update replaces the previous positions along with the columns.
///
/// Expected: only the new position remains and the player is sold
#[tokio::test]
async fn update_replaces_positions() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let old = factory::create_position(db, "Anfallare").await?;
    let new = factory::create_position(db, "Mittfältare").await?;

    let repo = PlayerRepository::new(db);
    let created = repo
        .create(CreatePlayerParams {
            first_name: "Kennedy".to_string(),
            last_name: "Bakircioglü".to_string(),
            kit_number: 10,
            is_captain: false,
            is_out_on_loan: false,
            is_here_on_loan: false,
            position_ids: vec![old.id],
        })
        .await?;
    assert_eq!(created.positions.len(), 1);

    let updated = repo
        .update(&UpdatePlayerParams {
            id: created.id,
            first_name: created.first_name.clone(),
            last_name: created.last_name.clone(),
            kit_number: 10,
            is_captain: false,
            is_out_on_loan: false,
            is_here_on_loan: false,
            is_sold: true,
            position_ids: vec![new.id],
        })
        .await?;
    assert!(updated);

    let player = repo.get_by_id(created.id).await?.unwrap();
    let names: Vec<&str> = player.positions.iter().map(|p| p.name.as_str()).collect();

    assert_eq!(names, vec!["Mittfältare"]);
    assert!(player.is_sold);

    Ok(())
}

/// Tests a failing position write rolls the new player back.
///
/// The schema lacks the player position table, so writing positions fails.
///
/// Expected: Err; no player rows
#[tokio::test]
async fn failed_positions_roll_back_player() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = PlayerRepository::new(db)
        .create(CreatePlayerParams {
            first_name: "Okänd".to_string(),
            last_name: "Position".to_string(),
            kit_number: 99,
            is_captain: false,
            is_out_on_loan: false,
            is_here_on_loan: false,
            position_ids: vec![1],
        })
        .await;

    assert!(result.is_err());
    assert!(entity::prelude::Player::find().all(db).await?.is_empty());

    Ok(())
}
