use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{
    forum::{FilterDto, ForumUserDto},
    squad::PlayerDto,
};

/// Public profile of a user.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: String,
    pub email: String,
    pub nick_name: Option<String>,
    /// Earlier nicknames, newest first, excluding the current one.
    pub previous_nick_names: Vec<String>,
    pub bio: Option<String>,
    pub avatar: Option<String>,
    pub region: Option<String>,
    pub in_roles: Vec<String>,
    pub joined: String,
    pub secluded_until: Option<String>,
    pub favorite_player: Option<PlayerDto>,
    pub number_of_posts: u64,
    pub filter: FilterDto,
}

/// New password set by an admin.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ResetPasswordDto {
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct InviteDto {
    pub id: i32,
    pub email: String,
    pub invited_by: ForumUserDto,
    pub invite_sent: String,
    pub account_created: bool,
    pub account_created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateInviteDto {
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PersonalMessageDto {
    pub id: i32,
    pub from: ForumUserDto,
    pub to: ForumUserDto,
    pub message: String,
    pub since: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatePersonalMessageDto {
    pub to_user_id: String,
    pub message: String,
}
