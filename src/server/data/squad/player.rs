//! Player data repository for database operations.
//!
//! A player row is always written together with its available positions, so
//! create and update each run in one transaction.

use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr,
    EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::squad::{CreatePlayerParams, Player, UpdatePlayerParams};

/// Repository providing database operations for squad players.
pub struct PlayerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayerRepository<'a> {
    /// Creates a new PlayerRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `PlayerRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Players still in the squad, ordered by last name.
    pub async fn get_active(&self) -> Result<Vec<Player>, DbErr> {
        let players = entity::prelude::Player::find()
            .filter(entity::player::Column::IsSold.eq(false))
            .order_by_asc(entity::player::Column::LastName)
            .order_by_asc(entity::player::Column::FirstName)
            .all(self.db)
            .await?;

        self.load(players).await
    }

    pub async fn get_by_id(&self, player_id: i32) -> Result<Option<Player>, DbErr> {
        let Some(player) = entity::prelude::Player::find_by_id(player_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(self.load(vec![player]).await?.into_iter().next())
    }

    /// Inserts the player and its available positions.
    ///
    /// # Arguments
    /// - `params` - Player columns and position ids; duplicates are stored once
    ///
    /// # Returns
    /// - `Ok(Player)` - The new player with positions attached
    /// - `Err(DbErr)` - Database error, e.g. an unknown position id
    pub async fn create(&self, params: CreatePlayerParams) -> Result<Player, DbErr> {
        let txn = self.db.begin().await?;

        let player = entity::player::ActiveModel {
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            kit_number: ActiveValue::Set(params.kit_number),
            is_captain: ActiveValue::Set(params.is_captain),
            is_out_on_loan: ActiveValue::Set(params.is_out_on_loan),
            is_here_on_loan: ActiveValue::Set(params.is_here_on_loan),
            is_sold: ActiveValue::Set(false),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        replace_positions(&txn, player.id, &params.position_ids).await?;
        txn.commit().await?;

        let created = self.load(vec![player]).await?;
        created
            .into_iter()
            .next()
            .ok_or_else(|| DbErr::RecordNotFound("Created player not found".to_string()))
    }

    /// Overwrites the player's own columns and replaces its positions.
    ///
    /// # Returns
    /// - `Ok(true)` - Player updated
    /// - `Ok(false)` - No player with that id
    /// - `Err(DbErr)` - Database error
    pub async fn update(&self, params: &UpdatePlayerParams) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        let Some(existing) = entity::prelude::Player::find_by_id(params.id)
            .one(&txn)
            .await?
        else {
            txn.rollback().await?;
            return Ok(false);
        };

        let mut active: entity::player::ActiveModel = existing.into();
        active.first_name = ActiveValue::Set(params.first_name.clone());
        active.last_name = ActiveValue::Set(params.last_name.clone());
        active.kit_number = ActiveValue::Set(params.kit_number);
        active.is_captain = ActiveValue::Set(params.is_captain);
        active.is_out_on_loan = ActiveValue::Set(params.is_out_on_loan);
        active.is_here_on_loan = ActiveValue::Set(params.is_here_on_loan);
        active.is_sold = ActiveValue::Set(params.is_sold);
        active.update(&txn).await?;

        replace_positions(&txn, params.id, &params.position_ids).await?;
        txn.commit().await?;

        Ok(true)
    }

    /// Attaches positions and lineup counts to `players`, keeping their order.
    pub async fn load(&self, players: Vec<entity::player::Model>) -> Result<Vec<Player>, DbErr> {
        if players.is_empty() {
            return Ok(Vec::new());
        }

        let player_ids: Vec<i32> = players.iter().map(|p| p.id).collect();

        let links = entity::prelude::PlayerPosition::find()
            .filter(entity::player_position::Column::PlayerId.is_in(player_ids.clone()))
            .order_by_asc(entity::player_position::Column::PositionId)
            .all(self.db)
            .await?;

        let positions: HashMap<i32, entity::position::Model> = if links.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::Position::find()
                .filter(
                    entity::position::Column::Id
                        .is_in(links.iter().map(|l| l.position_id).collect::<Vec<_>>()),
                )
                .all(self.db)
                .await?
                .into_iter()
                .map(|p| (p.id, p))
                .collect()
        };

        let mut positions_by_player: HashMap<i32, Vec<entity::position::Model>> = HashMap::new();
        for link in links {
            if let Some(position) = positions.get(&link.position_id) {
                positions_by_player
                    .entry(link.player_id)
                    .or_default()
                    .push(position.clone());
            }
        }

        let mut lineup_counts: HashMap<i32, u64> = HashMap::new();
        for row in entity::prelude::LineupPlayer::find()
            .filter(entity::lineup_player::Column::PlayerId.is_in(player_ids))
            .all(self.db)
            .await?
        {
            *lineup_counts.entry(row.player_id).or_default() += 1;
        }

        Ok(players
            .into_iter()
            .map(|player| {
                let positions = positions_by_player.remove(&player.id).unwrap_or_default();
                let count = lineup_counts.get(&player.id).copied().unwrap_or(0);
                Player::from_entity(player, positions, count)
            })
            .collect())
    }
}

/// Replaces the available positions of `player_id` inside `txn`.
async fn replace_positions(
    txn: &DatabaseTransaction,
    player_id: i32,
    position_ids: &[i32],
) -> Result<(), DbErr> {
    entity::prelude::PlayerPosition::delete_many()
        .filter(entity::player_position::Column::PlayerId.eq(player_id))
        .exec(txn)
        .await?;

    let mut seen = Vec::with_capacity(position_ids.len());
    for position_id in position_ids {
        if seen.contains(position_id) {
            continue;
        }
        seen.push(*position_id);

        entity::player_position::ActiveModel {
            player_id: ActiveValue::Set(player_id),
            position_id: ActiveValue::Set(*position_id),
            ..Default::default()
        }
        .insert(txn)
        .await?;
    }

    Ok(())
}
