use sea_orm::DatabaseConnection;

use crate::server::{
    data::chronicle::ChronicleRepository,
    error::AppError,
    model::{
        chronicle::{Chronicle, CreateChronicleParams, UpdateChronicleParams},
        result::{
            ActionResult, CHRONICLE_NOT_FOUND, CREATE_CHRONICLE, EMPTY_TITLE, SLUG_TAKEN,
            UPDATE_CHRONICLE,
        },
    },
    util::slug::slugify,
};

pub struct ChronicleService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> ChronicleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Chronicle>, AppError> {
        Ok(ChronicleRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<Chronicle, AppError> {
        ChronicleRepository::new(self.db)
            .get_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::NotFound(CHRONICLE_NOT_FOUND.to_string()))
    }

    /// Publishes a chronicle under a slug derived from its title.
    ///
    /// A title whose slug is already used answers with a failed entry.
    pub async fn create(
        &self,
        title: &str,
        text: &str,
        written_by_user_id: &str,
    ) -> Result<Vec<ActionResult>, AppError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(AppError::BadRequest(EMPTY_TITLE.to_string()));
        }

        let slug = slugify(title);
        let repo = ChronicleRepository::new(self.db);
        if slug.is_empty() || repo.slug_exists(&slug, None).await? {
            return Ok(vec![ActionResult::fail(SLUG_TAKEN)]);
        }

        repo.create(CreateChronicleParams {
            title: title.to_string(),
            slug,
            text: text.to_string(),
            written_by_user_id: written_by_user_id.to_string(),
        })
        .await?;

        Ok(vec![ActionResult::from_outcome(true, CREATE_CHRONICLE)])
    }

    /// Rewrites title and text; the slug follows the new title.
    pub async fn update(
        &self,
        id: i32,
        title: &str,
        text: &str,
    ) -> Result<Vec<ActionResult>, AppError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(AppError::BadRequest(EMPTY_TITLE.to_string()));
        }

        let repo = ChronicleRepository::new(self.db);
        if !repo.exists(id).await? {
            return Err(AppError::NotFound(CHRONICLE_NOT_FOUND.to_string()));
        }

        let slug = slugify(title);
        if slug.is_empty() || repo.slug_exists(&slug, Some(id)).await? {
            return Ok(vec![ActionResult::fail(SLUG_TAKEN)]);
        }

        let updated = repo
            .update(UpdateChronicleParams {
                id,
                title: title.to_string(),
                slug,
                text: text.to_string(),
            })
            .await?;

        Ok(vec![ActionResult::from_outcome(updated, UPDATE_CHRONICLE)])
    }
}
