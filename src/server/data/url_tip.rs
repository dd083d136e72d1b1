//! Url tip data repository.
//!
//! A post may have been given several tips over time; the newest one is its
//! current tip and the only one edits and clicks apply to. Tips are written
//! with their post by `PostRepository`.

use sea_orm::{
    sea_query::Expr, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, ExprTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::post::UrlTip;

pub struct UrlTipRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UrlTipRepository<'a> {
    /// Creates a new UrlTipRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UrlTipRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// All tips, most clicked first.
    ///
    /// # Returns
    /// - `Ok(Vec<UrlTip>)` - Tips ordered by clicks, then creation, descending
    /// - `Err(DbErr)` - Database error
    pub async fn get_all(&self) -> Result<Vec<UrlTip>, DbErr> {
        let tips = entity::prelude::UrlTip::find()
            .order_by_desc(entity::url_tip::Column::Clicks)
            .order_by_desc(entity::url_tip::Column::Created)
            .all(self.db)
            .await?;

        Ok(tips.into_iter().map(UrlTip::from_entity).collect())
    }

    /// The current tip of a post, i.e. the most recently created one.
    ///
    /// # Arguments
    /// - `post_id` - Post the tip belongs to
    ///
    /// # Returns
    /// - `Ok(Some(UrlTip))` - The current tip
    /// - `Ok(None)` - The post has no tip
    /// - `Err(DbErr)` - Database error
    pub async fn get_by_post(&self, post_id: i32) -> Result<Option<UrlTip>, DbErr> {
        let tip = entity::prelude::UrlTip::find()
            .filter(entity::url_tip::Column::PostId.eq(post_id))
            .order_by_desc(entity::url_tip::Column::Created)
            .order_by_desc(entity::url_tip::Column::Id)
            .one(self.db)
            .await?;

        Ok(tip.map(UrlTip::from_entity))
    }

    /// Counts a click on the current tip of `post_id`.
    ///
    /// The counter is incremented in the statement itself so concurrent clicks
    /// are all counted.
    ///
    /// # Returns
    /// - `Ok(true)` - Click counted
    /// - `Ok(false)` - The post has no tip
    /// - `Err(DbErr)` - Database error
    pub async fn increment_clicks(&self, post_id: i32) -> Result<bool, DbErr> {
        let Some(tip) = self.get_by_post(post_id).await? else {
            return Ok(false);
        };

        let result = entity::prelude::UrlTip::update_many()
            .filter(entity::url_tip::Column::Id.eq(tip.id))
            .col_expr(
                entity::url_tip::Column::Clicks,
                Expr::col(entity::url_tip::Column::Clicks).add(1),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
