use chrono::{DateTime, Utc};

use crate::{
    model::poll::{PollAlternativeDto, PollDto},
    server::{model::user::UserSummary, util::since::since},
};

#[derive(Debug, Clone)]
pub struct PollAlternative {
    pub id: i32,
    pub name: String,
    pub votes: u64,
}

#[derive(Debug, Clone)]
pub struct Poll {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub created_by: UserSummary,
    pub created: DateTime<Utc>,
    pub alternatives: Vec<PollAlternative>,
    pub logged_in_user_has_voted: bool,
}

impl Poll {
    pub fn from_entity(
        poll: entity::poll::Model,
        alternatives: Vec<PollAlternative>,
        created_by: UserSummary,
        logged_in_user_has_voted: bool,
    ) -> Self {
        Self {
            id: poll.id,
            name: poll.name,
            slug: poll.slug,
            created_by,
            created: poll.created,
            alternatives,
            logged_in_user_has_voted,
        }
    }

    pub fn total_votes(&self) -> u64 {
        self.alternatives.iter().map(|a| a.votes).sum()
    }

    pub fn into_dto(self) -> PollDto {
        PollDto {
            total_votes: self.total_votes(),
            id: self.id,
            name: self.name,
            slug: self.slug,
            created_by: self.created_by.into_dto(),
            since: since(self.created, Utc::now()),
            alternatives: self
                .alternatives
                .into_iter()
                .map(|a| PollAlternativeDto {
                    id: a.id,
                    name: a.name,
                    votes: a.votes,
                })
                .collect(),
            logged_in_user_has_voted: self.logged_in_user_has_voted,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreatePollParams {
    pub name: String,
    pub slug: String,
    pub created_by_user_id: String,
    pub alternatives: Vec<String>,
}
