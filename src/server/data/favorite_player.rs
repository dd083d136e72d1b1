//! Favorite player data repository.
//!
//! A user has at most one favorite player; picking a new one replaces the link.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::model::squad::Player;

pub struct FavoritePlayerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoritePlayerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// The player `user_id` has picked as favorite, without positions or stats.
    ///
    /// # Arguments
    /// - `user_id` - Id of the user
    ///
    /// # Returns
    /// - `Ok(Some(Player))` - The favorite player
    /// - `Ok(None)` - No favorite picked
    /// - `Err(DbErr)` - Database error
    pub async fn get_by_user(&self, user_id: &str) -> Result<Option<Player>, DbErr> {
        let Some(link) = entity::prelude::FavoritePlayer::find()
            .filter(entity::favorite_player::Column::UserId.eq(user_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let player = entity::prelude::Player::find_by_id(link.player_id)
            .one(self.db)
            .await?;

        Ok(player.map(Player::bare))
    }

    /// Links `player_id` as the favorite of `user_id`.
    ///
    /// # Returns
    /// - `Ok(())` - Link stored
    /// - `Err(DbErr)` - Insert failed, e.g. an unknown player
    pub async fn connect(&self, user_id: &str, player_id: i32) -> Result<(), DbErr> {
        entity::favorite_player::ActiveModel {
            user_id: ActiveValue::Set(user_id.to_string()),
            player_id: ActiveValue::Set(player_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Returns whether a link was removed.
    pub async fn delete_by_user(&self, user_id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::FavoritePlayer::delete_many()
            .filter(entity::favorite_player::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Removes every user's link to `player_id`, returning how many were removed.
    pub async fn delete_by_player(&self, player_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::FavoritePlayer::delete_many()
            .filter(entity::favorite_player::Column::PlayerId.eq(player_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
