//! Lineup data repository for database operations.
//!
//! A lineup is a formation with one position per picked player. Reads return
//! `Lineup` domain models with players and positions resolved.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::{
    data::squad::player::PlayerRepository,
    model::squad::{CreateLineupParams, Formation, Lineup, LineupPlayer, Position},
};

/// Repository providing database operations for starting elevens.
pub struct LineupRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LineupRepository<'a> {
    /// Creates a new LineupRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `LineupRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a lineup by id.
    ///
    /// # Returns
    /// - `Ok(Some(Lineup))` - Lineup with formation and picks
    /// - `Ok(None)` - No lineup with that id
    /// - `Err(DbErr)` - Database error
    pub async fn get_by_id(&self, lineup_id: i32) -> Result<Option<Lineup>, DbErr> {
        let Some(lineup) = entity::prelude::Lineup::find_by_id(lineup_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(self.load(vec![lineup]).await?.into_iter().next())
    }

    /// The lineup most recently linked to `post_id`.
    pub async fn get_by_post(&self, post_id: i32) -> Result<Option<Lineup>, DbErr> {
        let Some(link) = entity::prelude::PostLineup::find()
            .filter(entity::post_lineup::Column::PostId.eq(post_id))
            .order_by_desc(entity::post_lineup::Column::Id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        self.get_by_id(link.lineup_id).await
    }

    /// Lineups created by `user_id`, newest first.
    pub async fn get_by_user(&self, user_id: &str) -> Result<Vec<Lineup>, DbErr> {
        let lineups = entity::prelude::Lineup::find()
            .filter(entity::lineup::Column::CreatedByUserId.eq(user_id))
            .order_by_desc(entity::lineup::Column::Created)
            .order_by_desc(entity::lineup::Column::Id)
            .all(self.db)
            .await?;

        self.load(lineups).await
    }

    /// Inserts the lineup and its picks in one transaction.
    ///
    /// # Arguments
    /// - `params` - Formation, creator and `(player_id, position_id)` picks
    ///
    /// # Returns
    /// - `Ok(i32)` - Id of the new lineup
    /// - `Err(DbErr)` - Database error; nothing is written
    pub async fn create(&self, params: CreateLineupParams) -> Result<i32, DbErr> {
        let txn = self.db.begin().await?;

        let lineup = entity::lineup::ActiveModel {
            formation_id: ActiveValue::Set(params.formation_id),
            created_by_user_id: ActiveValue::Set(params.created_by_user_id),
            created: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        for (player_id, position_id) in params.players {
            entity::lineup_player::ActiveModel {
                lineup_id: ActiveValue::Set(lineup.id),
                player_id: ActiveValue::Set(player_id),
                position_id: ActiveValue::Set(position_id),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
        }

        txn.commit().await?;

        Ok(lineup.id)
    }

    async fn load(&self, lineups: Vec<entity::lineup::Model>) -> Result<Vec<Lineup>, DbErr> {
        if lineups.is_empty() {
            return Ok(Vec::new());
        }

        let lineup_ids: Vec<i32> = lineups.iter().map(|l| l.id).collect();

        let formations: HashMap<i32, entity::formation::Model> = entity::prelude::Formation::find()
            .filter(
                entity::formation::Column::Id
                    .is_in(lineups.iter().map(|l| l.formation_id).collect::<Vec<_>>()),
            )
            .all(self.db)
            .await?
            .into_iter()
            .map(|f| (f.id, f))
            .collect();

        let rows = entity::prelude::LineupPlayer::find()
            .filter(entity::lineup_player::Column::LineupId.is_in(lineup_ids))
            .order_by_asc(entity::lineup_player::Column::Id)
            .all(self.db)
            .await?;

        let player_models = if rows.is_empty() {
            Vec::new()
        } else {
            entity::prelude::Player::find()
                .filter(
                    entity::player::Column::Id
                        .is_in(rows.iter().map(|r| r.player_id).collect::<Vec<_>>()),
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

        let positions: HashMap<i32, entity::position::Model> = if rows.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::Position::find()
                .filter(
                    entity::position::Column::Id
                        .is_in(rows.iter().map(|r| r.position_id).collect::<Vec<_>>()),
                )
                .all(self.db)
                .await?
                .into_iter()
                .map(|p| (p.id, p))
                .collect()
        };

        let mut players_by_lineup: HashMap<i32, Vec<LineupPlayer>> = HashMap::new();
        for row in rows {
            let (Some(player), Some(position)) =
                (players.get(&row.player_id), positions.get(&row.position_id))
            else {
                continue;
            };

            players_by_lineup
                .entry(row.lineup_id)
                .or_default()
                .push(LineupPlayer {
                    id: row.id,
                    player: player.clone(),
                    position: Position::from_entity(position.clone()),
                });
        }

        let mut result = Vec::with_capacity(lineups.len());
        for lineup in lineups {
            let Some(formation) = formations.get(&lineup.formation_id) else {
                return Err(DbErr::RecordNotFound(format!(
                    "Formation {} of lineup {} not found",
                    lineup.formation_id, lineup.id
                )));
            };

            result.push(Lineup {
                id: lineup.id,
                formation: Formation::from_entity(formation.clone()),
                players: players_by_lineup.remove(&lineup.id).unwrap_or_default(),
                created: lineup.created,
            });
        }

        Ok(result)
    }
}
