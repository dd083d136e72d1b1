//! Title data repository for database operations.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::server::model::squad::{CreateTitleParams, Title};

/// Titles won by the club, shown on the squad page.
pub struct TitleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TitleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Titles, most recent year first.
    pub async fn get_all(&self) -> Result<Vec<Title>, DbErr> {
        let titles = entity::prelude::Title::find()
            .order_by_desc(entity::title::Column::Year)
            .order_by_desc(entity::title::Column::Id)
            .all(self.db)
            .await?;

        Ok(titles.into_iter().map(Title::from_entity).collect())
    }

    pub async fn create(&self, params: CreateTitleParams) -> Result<(), DbErr> {
        entity::title::ActiveModel {
            title_type: ActiveValue::Set(params.title_type),
            year: ActiveValue::Set(params.year),
            description: ActiveValue::Set(params.description),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }
}
