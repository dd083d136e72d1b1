//! Chronicle data repository for database operations.
//!
//! Chronicles are long form articles addressed by a slug derived from their
//! title. Reads resolve the writer into a `UserSummary`.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::user::UserRepository,
    model::{
        chronicle::{Chronicle, CreateChronicleParams, UpdateChronicleParams},
        user::UserSummary,
    },
};

/// Repository providing database operations for chronicles.
pub struct ChronicleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ChronicleRepository<'a> {
    /// Creates a new ChronicleRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ChronicleRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// All chronicles, newest first.
    ///
    /// # Returns
    /// - `Ok(Vec<Chronicle>)` - Chronicles with their writers
    /// - `Err(DbErr)` - Database error
    pub async fn get_all(&self) -> Result<Vec<Chronicle>, DbErr> {
        let chronicles = entity::prelude::Chronicle::find()
            .order_by_desc(entity::chronicle::Column::Created)
            .order_by_desc(entity::chronicle::Column::Id)
            .all(self.db)
            .await?;

        self.with_writers(chronicles).await
    }

    /// Finds a chronicle by its slug.
    ///
    /// # Arguments
    /// - `slug` - Url slug derived from the title
    ///
    /// # Returns
    /// - `Ok(Some(Chronicle))` - Chronicle found
    /// - `Ok(None)` - No chronicle with that slug
    /// - `Err(DbErr)` - Database error
    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<Chronicle>, DbErr> {
        let Some(chronicle) = entity::prelude::Chronicle::find()
            .filter(entity::chronicle::Column::Slug.eq(slug))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(self.with_writers(vec![chronicle]).await?.into_iter().next())
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Chronicle::find_by_id(id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Whether a chronicle other than `except_id` already uses `slug`.
    pub async fn slug_exists(&self, slug: &str, except_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query =
            entity::prelude::Chronicle::find().filter(entity::chronicle::Column::Slug.eq(slug));
        if let Some(id) = except_id {
            query = query.filter(entity::chronicle::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Stores a new chronicle.
    ///
    /// # Arguments
    /// - `params` - Title, slug, text and writer
    ///
    /// # Returns
    /// - `Ok(())` - Chronicle stored
    /// - `Err(DbErr)` - Database error, e.g. the slug is already taken
    pub async fn create(&self, params: CreateChronicleParams) -> Result<(), DbErr> {
        entity::chronicle::ActiveModel {
            title: ActiveValue::Set(params.title),
            slug: ActiveValue::Set(params.slug),
            text: ActiveValue::Set(params.text),
            written_by_user_id: ActiveValue::Set(params.written_by_user_id),
            created: ActiveValue::Set(Utc::now()),
            updated: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Rewrites title, slug and text and stamps the update time.
    ///
    /// # Returns
    /// - `Ok(true)` - Chronicle updated
    /// - `Ok(false)` - No chronicle with that id
    /// - `Err(DbErr)` - Database error
    pub async fn update(&self, params: UpdateChronicleParams) -> Result<bool, DbErr> {
        let result = entity::prelude::Chronicle::update_many()
            .filter(entity::chronicle::Column::Id.eq(params.id))
            .col_expr(entity::chronicle::Column::Title, Expr::value(params.title))
            .col_expr(entity::chronicle::Column::Slug, Expr::value(params.slug))
            .col_expr(entity::chronicle::Column::Text, Expr::value(params.text))
            .col_expr(
                entity::chronicle::Column::Updated,
                Expr::value(Some(Utc::now())),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn with_writers(
        &self,
        chronicles: Vec<entity::chronicle::Model>,
    ) -> Result<Vec<Chronicle>, DbErr> {
        let mut writer_ids: Vec<String> = chronicles
            .iter()
            .map(|c| c.written_by_user_id.clone())
            .collect();
        writer_ids.sort();
        writer_ids.dedup();
        let writers = UserRepository::new(self.db)
            .get_summaries(&writer_ids)
            .await?;

        Ok(chronicles
            .into_iter()
            .map(|chronicle| {
                let written_by = writers
                    .get(&chronicle.written_by_user_id)
                    .cloned()
                    .unwrap_or_else(|| UserSummary::unknown(&chronicle.written_by_user_id));
                Chronicle::from_entity(chronicle, written_by)
            })
            .collect())
    }
}
