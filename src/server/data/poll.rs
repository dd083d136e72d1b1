//! Poll data repository for database operations.
//!
//! Polls are read together with their alternatives, the vote count of each
//! alternative, the creator and whether the viewing user has voted.

use std::collections::{HashMap, HashSet};

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::{
    data::user::UserRepository,
    model::{
        poll::{CreatePollParams, Poll, PollAlternative},
        user::UserSummary,
    },
};

/// Repository providing database operations for polls and poll votes.
pub struct PollRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PollRepository<'a> {
    /// Creates a new PollRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `PollRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// All polls, newest first, as seen by `viewer_id`.
    ///
    /// # Arguments
    /// - `viewer_id` - User whose own votes set `logged_in_user_has_voted`
    ///
    /// # Returns
    /// - `Ok(Vec<Poll>)` - Polls with alternatives and counts
    /// - `Err(DbErr)` - Database error
    pub async fn get_all(&self, viewer_id: &str) -> Result<Vec<Poll>, DbErr> {
        let polls = entity::prelude::Poll::find()
            .order_by_desc(entity::poll::Column::Created)
            .order_by_desc(entity::poll::Column::Id)
            .all(self.db)
            .await?;

        self.load(polls, viewer_id).await
    }

    /// Finds a poll by its slug.
    ///
    /// # Arguments
    /// - `slug` - Url slug derived from the poll name
    /// - `viewer_id` - User whose own vote sets `logged_in_user_has_voted`
    ///
    /// # Returns
    /// - `Ok(Some(Poll))` - Poll found
    /// - `Ok(None)` - No poll with that slug
    /// - `Err(DbErr)` - Database error
    pub async fn get_by_slug(&self, slug: &str, viewer_id: &str) -> Result<Option<Poll>, DbErr> {
        let Some(poll) = entity::prelude::Poll::find()
            .filter(entity::poll::Column::Slug.eq(slug))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(self.load(vec![poll], viewer_id).await?.into_iter().next())
    }

    pub async fn slug_exists(&self, slug: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Poll::find()
            .filter(entity::poll::Column::Slug.eq(slug))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Inserts the poll and one alternative per name, in the given order.
    ///
    /// Runs in one transaction so a poll never exists without its alternatives.
    ///
    /// # Arguments
    /// - `params` - Validated poll values
    ///
    /// # Returns
    /// - `Ok(())` - Poll and alternatives stored
    /// - `Err(DbErr)` - Database error, e.g. the slug is already taken
    pub async fn create(&self, params: CreatePollParams) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;

        let poll = entity::poll::ActiveModel {
            name: ActiveValue::Set(params.name),
            slug: ActiveValue::Set(params.slug),
            created_by_user_id: ActiveValue::Set(params.created_by_user_id),
            created: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        for name in params.alternatives {
            entity::poll_alternative::ActiveModel {
                poll_id: ActiveValue::Set(poll.id),
                name: ActiveValue::Set(name),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
        }

        txn.commit().await
    }

    /// Stores the vote of `user_id` for `alternative_id`.
    pub async fn create_vote(
        &self,
        poll_id: i32,
        alternative_id: i32,
        user_id: &str,
    ) -> Result<(), DbErr> {
        entity::poll_vote::ActiveModel {
            poll_id: ActiveValue::Set(poll_id),
            alternative_id: ActiveValue::Set(alternative_id),
            user_id: ActiveValue::Set(user_id.to_string()),
            created: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    async fn load(
        &self,
        polls: Vec<entity::poll::Model>,
        viewer_id: &str,
    ) -> Result<Vec<Poll>, DbErr> {
        if polls.is_empty() {
            return Ok(Vec::new());
        }

        let poll_ids: Vec<i32> = polls.iter().map(|p| p.id).collect();

        let alternatives = entity::prelude::PollAlternative::find()
            .filter(entity::poll_alternative::Column::PollId.is_in(poll_ids.clone()))
            .order_by_asc(entity::poll_alternative::Column::Id)
            .all(self.db)
            .await?;

        let mut vote_counts: HashMap<i32, u64> = HashMap::new();
        let mut voted_in: HashSet<i32> = HashSet::new();
        for vote in entity::prelude::PollVote::find()
            .filter(entity::poll_vote::Column::PollId.is_in(poll_ids))
            .all(self.db)
            .await?
        {
            *vote_counts.entry(vote.alternative_id).or_default() += 1;
            if vote.user_id == viewer_id {
                voted_in.insert(vote.poll_id);
            }
        }

        let mut by_poll: HashMap<i32, Vec<PollAlternative>> = HashMap::new();
        for alternative in alternatives {
            by_poll
                .entry(alternative.poll_id)
                .or_default()
                .push(PollAlternative {
                    votes: vote_counts.get(&alternative.id).copied().unwrap_or(0),
                    id: alternative.id,
                    name: alternative.name,
                });
        }

        let mut creator_ids: Vec<String> = polls
            .iter()
            .map(|p| p.created_by_user_id.clone())
            .collect();
        creator_ids.sort();
        creator_ids.dedup();
        let creators = UserRepository::new(self.db)
            .get_summaries(&creator_ids)
            .await?;

        Ok(polls
            .into_iter()
            .map(|poll| {
                let created_by = creators
                    .get(&poll.created_by_user_id)
                    .cloned()
                    .unwrap_or_else(|| UserSummary::unknown(&poll.created_by_user_id));
                let alternatives = by_poll.remove(&poll.id).unwrap_or_default();
                let has_voted = voted_in.contains(&poll.id);

                Poll::from_entity(poll, alternatives, created_by, has_voted)
            })
            .collect())
    }
}
