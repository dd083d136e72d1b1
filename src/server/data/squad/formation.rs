//! Formation data repository for database operations.

use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::server::model::squad::Formation;

pub struct FormationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FormationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Formation>, DbErr> {
        let formations = entity::prelude::Formation::find()
            .order_by_asc(entity::formation::Column::Id)
            .all(self.db)
            .await?;

        Ok(formations.into_iter().map(Formation::from_entity).collect())
    }

    pub async fn get_by_id(&self, formation_id: i32) -> Result<Option<Formation>, DbErr> {
        let formation = entity::prelude::Formation::find_by_id(formation_id)
            .one(self.db)
            .await?;

        Ok(formation.map(Formation::from_entity))
    }
}
