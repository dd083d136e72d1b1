//! Nickname data repository for database operations.
//!
//! Nicknames are append only; a user's current nickname is their newest row
//! and the older rows form the nickname history shown on the profile.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

/// Repository providing database operations for nicknames.
pub struct NicknameRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NicknameRepository<'a> {
    /// Creates a new NicknameRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `NicknameRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends `nick` as the new current nickname of `user_id`.
    ///
    /// # Arguments
    /// - `user_id` - Id of the user
    /// - `nick` - Trimmed, non-empty nickname
    ///
    /// # Returns
    /// - `Ok(())` - Nickname stored
    /// - `Err(DbErr)` - Database error, e.g. an unknown user id
    pub async fn create(&self, user_id: &str, nick: &str) -> Result<(), DbErr> {
        entity::nickname::ActiveModel {
            user_id: ActiveValue::Set(user_id.to_string()),
            nick: ActiveValue::Set(nick.to_string()),
            created: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// All nicknames of a user, newest first.
    pub async fn get_for_user(&self, user_id: &str) -> Result<Vec<String>, DbErr> {
        let nicks = entity::prelude::Nickname::find()
            .filter(entity::nickname::Column::UserId.eq(user_id))
            .order_by_desc(entity::nickname::Column::Created)
            .order_by_desc(entity::nickname::Column::Id)
            .all(self.db)
            .await?;

        Ok(nicks.into_iter().map(|n| n.nick).collect())
    }

    pub async fn current_for_user(&self, user_id: &str) -> Result<Option<String>, DbErr> {
        let nick = entity::prelude::Nickname::find()
            .filter(entity::nickname::Column::UserId.eq(user_id))
            .order_by_desc(entity::nickname::Column::Created)
            .order_by_desc(entity::nickname::Column::Id)
            .one(self.db)
            .await?;

        Ok(nick.map(|n| n.nick))
    }

    /// Current nickname per user id, for every id that has one.
    pub async fn current_for_users(
        &self,
        user_ids: &[String],
    ) -> Result<HashMap<String, String>, DbErr> {
        if user_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let nicks = entity::prelude::Nickname::find()
            .filter(entity::nickname::Column::UserId.is_in(user_ids.iter().cloned()))
            .order_by_asc(entity::nickname::Column::Created)
            .order_by_asc(entity::nickname::Column::Id)
            .all(self.db)
            .await?;

        // Ascending order, so the newest row per user is inserted last.
        Ok(nicks.into_iter().map(|n| (n.user_id, n.nick)).collect())
    }

    /// Whether `nick` is the current nickname of a user other than `user_id`.
    ///
    /// Old nicknames that have since been replaced do not count.
    pub async fn is_taken_by_other_user(&self, nick: &str, user_id: &str) -> Result<bool, DbErr> {
        let candidates: Vec<String> = entity::prelude::Nickname::find()
            .filter(entity::nickname::Column::Nick.eq(nick))
            .filter(entity::nickname::Column::UserId.ne(user_id))
            .all(self.db)
            .await?
            .into_iter()
            .map(|n| n.user_id)
            .collect();

        let current = self.current_for_users(&candidates).await?;

        Ok(current.values().any(|current_nick| current_nick == nick))
    }
}
