//! Post vote data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::server::model::post::CreateVoteParams;

pub struct VoteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VoteRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a vote.
    ///
    /// The unique `(post_id, created_by_user_id)` index makes a second vote by
    /// the same user fail.
    ///
    /// # Arguments
    /// - `params` - Vote type, post and voter
    ///
    /// # Returns
    /// - `Ok(())` - Vote stored
    /// - `Err(DbErr)` - Insert failed, e.g. a duplicate vote
    pub async fn create(&self, params: CreateVoteParams) -> Result<(), DbErr> {
        entity::vote::ActiveModel {
            vote_type: ActiveValue::Set(params.vote_type),
            post_id: ActiveValue::Set(params.post_id),
            created_by_user_id: ActiveValue::Set(params.created_by_user_id),
            created: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Whether `user_id` has already voted on `post_id`.
    pub async fn user_has_voted(&self, post_id: i32, user_id: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Vote::find()
            .filter(entity::vote::Column::PostId.eq(post_id))
            .filter(entity::vote::Column::CreatedByUserId.eq(user_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
