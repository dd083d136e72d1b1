//! Polls: one vote per user and poll, alternatives counted in the store.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::poll::PollRepository,
    error::AppError,
    model::{
        poll::{CreatePollParams, Poll},
        result::{
            ActionResult, ALREADY_VOTED_POLL, CREATE_POLL, CREATE_POLL_VOTE, EMPTY_NAME,
            POLL_NOT_FOUND, SLUG_TAKEN, TOO_FEW_ALTERNATIVES, UNKNOWN_ALTERNATIVE,
        },
    },
    util::slug::slugify,
};

const MIN_ALTERNATIVES: usize = 2;

pub struct PollService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> PollService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Every poll, newest first, as seen by `viewer_id`.
    pub async fn get_all(&self, viewer_id: &str) -> Result<Vec<Poll>, AppError> {
        Ok(PollRepository::new(self.db).get_all(viewer_id).await?)
    }

    pub async fn get_by_slug(&self, viewer_id: &str, slug: &str) -> Result<Poll, AppError> {
        PollRepository::new(self.db)
            .get_by_slug(slug, viewer_id)
            .await?
            .ok_or_else(|| AppError::NotFound(POLL_NOT_FOUND.to_string()))
    }

    /// Creates a poll whose slug is derived from its name.
    ///
    /// # Returns
    /// - `Ok(results)` - Poll created, or a failed entry when the slug is taken
    /// - `Err(AppError::BadRequest)` - Empty name or fewer than two alternatives
    pub async fn create(
        &self,
        name: &str,
        alternatives: Vec<String>,
        created_by_user_id: &str,
    ) -> Result<Vec<ActionResult>, AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::BadRequest(EMPTY_NAME.to_string()));
        }

        let alternatives: Vec<String> = alternatives
            .into_iter()
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty())
            .collect();
        if alternatives.len() < MIN_ALTERNATIVES {
            return Err(AppError::BadRequest(TOO_FEW_ALTERNATIVES.to_string()));
        }

        let slug = slugify(name);
        let poll_repo = PollRepository::new(self.db);
        if slug.is_empty() || poll_repo.slug_exists(&slug).await? {
            return Ok(vec![ActionResult::fail(SLUG_TAKEN)]);
        }

        poll_repo
            .create(CreatePollParams {
                name: name.to_string(),
                slug,
                created_by_user_id: created_by_user_id.to_string(),
                alternatives,
            })
            .await?;

        Ok(vec![ActionResult::from_outcome(true, CREATE_POLL)])
    }

    /// Casts the vote of `user_id` for `alternative_id` in the poll `slug`.
    ///
    /// # Returns
    /// - `Ok(results)` - Vote stored, or a failed entry when already voted
    /// - `Err(AppError::NotFound)` - No such poll
    /// - `Err(AppError::BadRequest)` - Alternative belongs to another poll
    pub async fn vote(
        &self,
        slug: &str,
        alternative_id: i32,
        user_id: &str,
    ) -> Result<Vec<ActionResult>, AppError> {
        let poll_repo = PollRepository::new(self.db);

        let Some(poll) = poll_repo.get_by_slug(slug, user_id).await? else {
            return Err(AppError::NotFound(POLL_NOT_FOUND.to_string()));
        };

        if !poll.alternatives.iter().any(|a| a.id == alternative_id) {
            return Err(AppError::BadRequest(UNKNOWN_ALTERNATIVE.to_string()));
        }

        if poll.logged_in_user_has_voted {
            return Ok(vec![ActionResult::fail(ALREADY_VOTED_POLL)]);
        }

        poll_repo
            .create_vote(poll.id, alternative_id, user_id)
            .await?;

        Ok(vec![ActionResult::from_outcome(true, CREATE_POLL_VOTE)])
    }
}
