use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::forum::ForumUserDto;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PollAlternativeDto {
    pub id: i32,
    pub name: String,
    pub votes: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PollDto {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub created_by: ForumUserDto,
    pub since: String,
    pub alternatives: Vec<PollAlternativeDto>,
    pub total_votes: u64,
    pub logged_in_user_has_voted: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatePollDto {
    pub name: String,
    pub alternatives: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatePollVoteDto {
    pub alternative_id: i32,
}
