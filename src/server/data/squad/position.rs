//! Position data repository for database operations.

use std::collections::HashSet;

use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::squad::Position;

/// Positions are seeded lookup data; players and lineup picks refer to them.
pub struct PositionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PositionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Position>, DbErr> {
        let positions = entity::prelude::Position::find()
            .order_by_asc(entity::position::Column::Id)
            .all(self.db)
            .await?;

        Ok(positions.into_iter().map(Position::from_entity).collect())
    }

    /// Whether every id in `position_ids` names a stored position.
    ///
    /// # Returns
    /// - `Ok(true)` - All ids known, or `position_ids` is empty
    /// - `Ok(false)` - At least one unknown id
    /// - `Err(DbErr)` - Database error
    pub async fn all_exist(&self, position_ids: &[i32]) -> Result<bool, DbErr> {
        let distinct: HashSet<i32> = position_ids.iter().copied().collect();
        if distinct.is_empty() {
            return Ok(true);
        }

        let found = entity::prelude::Position::find()
            .filter(entity::position::Column::Id.is_in(distinct.iter().copied()))
            .count(self.db)
            .await?;

        Ok(found == distinct.len() as u64)
    }
}
