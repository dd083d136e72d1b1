use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::api::KeyValueDto;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum VoteTypeDto {
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub enum StartingElevenDto {
    #[default]
    All,
    With,
    Without,
}

/// Author of a post as shown in the forum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ForumUserDto {
    pub id: String,
    pub nick_name: Option<String>,
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct VoteDto {
    pub vote_type: VoteTypeDto,
    pub by_nick_name: String,
}

/// One link in the chain of posts a post replies to.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ParentPostDto {
    pub id: i32,
    pub message: String,
    pub user: ForumUserDto,
    pub since: String,
    #[schema(no_recursion)]
    pub parent: Option<Box<ParentPostDto>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PostDto {
    pub id: i32,
    pub message: String,
    pub user: ForumUserDto,
    pub url_tip_href: Option<String>,
    pub votes: Vec<VoteDto>,
    pub parent_post: Option<ParentPostDto>,
    pub lineup_id: Option<i32>,
    pub since: String,
    pub updated: Option<String>,
    pub is_scissored: bool,
    pub logged_in_user_can_vote: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PostPageDto {
    pub data: Vec<PostDto>,
    pub current_page: u64,
    pub number_of_pages: u64,
    pub total: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatePostDto {
    pub message: String,
    pub parent_post_id: Option<i32>,
    pub url_tip_href: Option<String>,
    pub lineup_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdatePostDto {
    pub id: i32,
    pub message: String,
    pub url_tip_href: Option<String>,
    pub lineup_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateVoteDto {
    pub vote_type: VoteTypeDto,
    pub post_id: i32,
}

/// Url tip with its click count, for the tip toplist.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UrlTipDto {
    pub id: i32,
    pub post_id: i32,
    pub href: String,
    pub clicks: i32,
    pub since: String,
}

/// Forum listing filter, both as saved per user and as posted ad hoc.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FilterDto {
    pub posts_per_page: u64,
    #[serde(default)]
    pub excluded_users: Vec<KeyValueDto>,
    #[serde(default)]
    pub included_users: Vec<KeyValueDto>,
    /// `YYYY-MM-DD`
    pub from_date: Option<String>,
    /// `YYYY-MM-DD`
    pub to_date: Option<String>,
    #[serde(default)]
    pub starting_eleven: StartingElevenDto,
}
