//! Game data repository for database operations.
//!
//! Games are stored with their player events (goals, cards, substitutions)
//! and read back with each event's player resolved.

use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::{
    data::squad::player::PlayerRepository,
    model::squad::{CreateGameParams, Game, PlayerEvent},
};

/// Repository providing database operations for games and player events.
pub struct GameRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameRepository<'a> {
    /// Creates a new GameRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `GameRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Games with their player events, most recently played first.
    pub async fn get_all(&self) -> Result<Vec<Game>, DbErr> {
        let games = entity::prelude::Game::find()
            .order_by_desc(entity::game::Column::PlayedOn)
            .order_by_desc(entity::game::Column::Id)
            .all(self.db)
            .await?;

        if games.is_empty() {
            return Ok(Vec::new());
        }

        let events = entity::prelude::PlayerEvent::find()
            .filter(
                entity::player_event::Column::GameId
                    .is_in(games.iter().map(|g| g.id).collect::<Vec<_>>()),
            )
            .order_by_asc(entity::player_event::Column::InMinute)
            .order_by_asc(entity::player_event::Column::Id)
            .all(self.db)
            .await?;

        let player_models = if events.is_empty() {
            Vec::new()
        } else {
            entity::prelude::Player::find()
                .filter(
                    entity::player::Column::Id
                        .is_in(events.iter().map(|e| e.player_id).collect::<Vec<_>>()),
                )
                .all(self.db)
                .await?
        };
        let players: HashMap<i32, _> = PlayerRepository::new(self.db)
            .load(player_models)
            .await?
            .into_iter()
            .map(|p| (p.id, p))
            .collect();

        let mut events_by_game: HashMap<i32, Vec<PlayerEvent>> = HashMap::new();
        for event in events {
            let Some(player) = players.get(&event.player_id) else {
                continue;
            };

            events_by_game
                .entry(event.game_id)
                .or_default()
                .push(PlayerEvent {
                    id: event.id,
                    player: player.clone(),
                    event_type: event.event_type,
                    in_minute: event.in_minute,
                });
        }

        Ok(games
            .into_iter()
            .map(|game| Game {
                events: events_by_game.remove(&game.id).unwrap_or_default(),
                id: game.id,
                game_type: game.game_type,
                played_on: game.played_on,
            })
            .collect())
    }

    /// Inserts the game and its player events in one transaction.
    ///
    /// # Arguments
    /// - `params` - Game type, date and events
    ///
    /// # Returns
    /// - `Ok(())` - Game and events stored
    /// - `Err(DbErr)` - Database error; nothing is written
    pub async fn create(&self, params: CreateGameParams) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;

        let game = entity::game::ActiveModel {
            game_type: ActiveValue::Set(params.game_type),
            played_on: ActiveValue::Set(params.played_on),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        for event in params.events {
            entity::player_event::ActiveModel {
                game_id: ActiveValue::Set(game.id),
                player_id: ActiveValue::Set(event.player_id),
                event_type: ActiveValue::Set(event.event_type),
                in_minute: ActiveValue::Set(event.in_minute),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
        }

        txn.commit().await
    }
}
