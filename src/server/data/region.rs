//! Region data repository.
//!
//! Regions are where supporters live; each user may belong to one. Member
//! counts are one count query per region rather than a load of every user.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::region::Region;

pub struct RegionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RegionRepository<'a> {
    /// Creates a new RegionRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `RegionRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Regions by name, each with the number of users living there.
    ///
    /// # Returns
    /// - `Ok(Vec<Region>)` - Every region, alphabetically
    /// - `Err(DbErr)` - Database error
    pub async fn get_all(&self) -> Result<Vec<Region>, DbErr> {
        let regions = entity::prelude::Region::find()
            .order_by_asc(entity::region::Column::Name)
            .all(self.db)
            .await?;

        let mut result = Vec::with_capacity(regions.len());
        for region in regions {
            let users = self.count_users(region.id).await?;
            result.push(Region::from_entity(region, users));
        }

        Ok(result)
    }

    /// Finds a region by id together with its member count.
    ///
    /// # Arguments
    /// - `region_id` - Id of the region
    ///
    /// # Returns
    /// - `Ok(Some(Region))` - Region found
    /// - `Ok(None)` - No region with that id
    /// - `Err(DbErr)` - Database error
    pub async fn get_by_id(&self, region_id: i32) -> Result<Option<Region>, DbErr> {
        let Some(region) = entity::prelude::Region::find_by_id(region_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let users = self.count_users(region.id).await?;

        Ok(Some(Region::from_entity(region, users)))
    }

    pub async fn name_exists(&self, name: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Region::find()
            .filter(entity::region::Column::Name.eq(name))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Adds a region with no members.
    ///
    /// # Returns
    /// - `Ok(Region)` - The created region
    /// - `Err(DbErr)` - Insert failed, e.g. the name is taken
    pub async fn create(&self, name: &str) -> Result<Region, DbErr> {
        let region = entity::region::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Region::from_entity(region, 0))
    }

    async fn count_users(&self, region_id: i32) -> Result<u64, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::RegionId.eq(region_id))
            .count(self.db)
            .await
    }
}
