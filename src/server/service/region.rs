use sea_orm::DatabaseConnection;

use crate::server::{
    data::region::RegionRepository,
    error::AppError,
    model::{
        region::Region,
        result::{ActionResult, CREATE_REGION, EMPTY_NAME, REGION_EXISTS},
    },
};

pub struct RegionService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> RegionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Regions by name with the number of users living in each.
    pub async fn get_all(&self) -> Result<Vec<Region>, AppError> {
        Ok(RegionRepository::new(self.db).get_all().await?)
    }

    /// Adds a region. A name already in use answers with a failed entry.
    pub async fn create(&self, name: &str) -> Result<Vec<ActionResult>, AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::BadRequest(EMPTY_NAME.to_string()));
        }

        let repo = RegionRepository::new(self.db);
        if repo.name_exists(name).await? {
            return Ok(vec![ActionResult::fail(REGION_EXISTS)]);
        }

        repo.create(name).await?;

        Ok(vec![ActionResult::from_outcome(true, CREATE_REGION)])
    }
}
