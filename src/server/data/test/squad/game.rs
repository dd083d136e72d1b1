use super::*;

/// Tests games come back newest first with their events in minute order.
///
/// Expected: cup game first; league game events ordered 12, 67
#[tokio::test]
async fn creates_games_with_events() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let scorer = factory::create_player(db).await?;
    let repo = GameRepository::new(db);

    repo.create(CreateGameParams {
        game_type: GameType::League,
        played_on: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
        events: vec![
            CreatePlayerEventParams {
                player_id: scorer.id,
                event_type: EventType::YellowCard,
                in_minute: 67,
            },
            CreatePlayerEventParams {
                player_id: scorer.id,
                event_type: EventType::Goal,
                in_minute: 12,
            },
        ],
    })
    .await?;
    repo.create(CreateGameParams {
        game_type: GameType::Cup,
        played_on: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        events: vec![],
    })
    .await?;

    let games = repo.get_all().await?;

    assert_eq!(games.len(), 2);
    assert_eq!(games[0].game_type, GameType::Cup);
    let minutes: Vec<i32> = games[1].events.iter().map(|e| e.in_minute).collect();
    assert_eq!(minutes, vec![12, 67]);
    assert_eq!(games[1].events[0].event_type, EventType::Goal);
    assert_eq!(games[1].events[0].player.id, scorer.id);

    Ok(())
}
