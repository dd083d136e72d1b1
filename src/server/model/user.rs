//! User domain models: profiles, author summaries, invites and personal messages.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::{
    model::{
        api::KeyValueDto,
        forum::ForumUserDto,
        user::{InviteDto, PersonalMessageDto, UserDto},
    },
    server::{
        model::{filter::Filter, squad::Player},
        util::since::since,
    },
};

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

pub const ROLE_ADMIN: &str = "Admin";
pub const ROLE_AUTHOR: &str = "Author";
pub const ROLE_SCISSOR: &str = "Scissor";

/// A stored account: credentials, profile fields and seclusion.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub id: String,
    pub email: String,
    /// Argon2 PHC string.
    pub password_hash: String,
    pub bio: Option<String>,
    pub avatar_file_name: Option<String>,
    pub secluded_until: Option<DateTime<Utc>>,
    pub region_id: Option<i32>,
    pub joined: DateTime<Utc>,
}

impl Account {
    /// Converts an entity model to an account at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The user row
    ///
    /// # Returns
    /// - `Account` - The converted domain model
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            password_hash: entity.password_hash,
            bio: entity.bio,
            avatar_file_name: entity.avatar_file_name,
            secluded_until: entity.secluded_until,
            region_id: entity.region_id,
            joined: entity.joined,
        }
    }

    /// The end of the seclusion when it is still in force at `now`.
    pub fn secluded_at(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        self.secluded_until.filter(|until| *until > now)
    }
}

/// The user behind the current session together with their role names.
#[derive(Debug, Clone)]
pub struct LoggedInUser {
    pub user: Account,
    pub roles: Vec<String>,
}

impl LoggedInUser {
    pub fn id(&self) -> &str {
        &self.user.id
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(ROLE_ADMIN)
    }

    /// Admins may act on behalf of anyone; everybody else only on themselves.
    pub fn is_self_or_admin(&self, user_id: &str) -> bool {
        self.user.id == user_id || self.is_admin()
    }
}

/// What the forum shows about a user next to their content.
#[derive(Debug, Clone, PartialEq)]
pub struct UserSummary {
    pub id: String,
    pub nick: Option<String>,
    pub avatar: Option<String>,
}

impl UserSummary {
    /// Resolves the current nickname of `user` from a batch loaded `nicks` map.
    pub fn from_account(user: &Account, nicks: &HashMap<String, String>) -> Self {
        Self {
            id: user.id.clone(),
            nick: nicks.get(&user.id).cloned(),
            avatar: user.avatar_file_name.clone(),
        }
    }

    /// Summary for an author whose row no longer exists.
    pub fn unknown(id: &str) -> Self {
        Self {
            id: id.to_string(),
            nick: None,
            avatar: None,
        }
    }

    pub fn into_dto(self) -> ForumUserDto {
        ForumUserDto {
            id: self.id,
            nick_name: self.nick,
            avatar: self.avatar,
        }
    }

    pub fn into_key_value(self) -> KeyValueDto {
        KeyValueDto {
            key: self.id,
            value: self.nick.unwrap_or_default(),
        }
    }
}

/// Full profile of a user.
#[derive(Debug, Clone)]
pub struct User {
    pub id: String,
    pub email: String,
    pub nick: Option<String>,
    pub previous_nicks: Vec<String>,
    pub bio: Option<String>,
    pub avatar: Option<String>,
    pub region: Option<String>,
    pub roles: Vec<String>,
    pub joined: DateTime<Utc>,
    pub secluded_until: Option<DateTime<Utc>>,
    pub favorite_player: Option<Player>,
    pub number_of_posts: u64,
    pub filter: Filter,
}

impl User {
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            nick_name: self.nick,
            previous_nick_names: self.previous_nicks,
            bio: self.bio,
            avatar: self.avatar,
            region: self.region,
            in_roles: self.roles,
            joined: self.joined.format(DATETIME_FORMAT).to_string(),
            secluded_until: self
                .secluded_until
                .map(|d| d.format(DATETIME_FORMAT).to_string()),
            favorite_player: self.favorite_player.map(Player::into_dto),
            number_of_posts: self.number_of_posts,
            filter: self.filter.into_dto(),
        }
    }
}

/// Values for a new account, already validated and hashed.
///
/// The account, its first nickname and the consumed invite are written in
/// one transaction.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub id: String,
    pub email: String,
    pub password_hash: String,
    pub nick: String,
    pub bio: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Invite {
    pub id: i32,
    pub email: String,
    pub invited_by: UserSummary,
    pub invite_sent: DateTime<Utc>,
    pub account_created: bool,
    pub account_created_at: Option<DateTime<Utc>>,
}

impl Invite {
    pub fn from_entity(entity: entity::invite::Model, invited_by: UserSummary) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            invited_by,
            invite_sent: entity.invite_sent,
            account_created: entity.account_created,
            account_created_at: entity.account_created_at,
        }
    }

    pub fn into_dto(self) -> InviteDto {
        InviteDto {
            id: self.id,
            email: self.email,
            invited_by: self.invited_by.into_dto(),
            invite_sent: self.invite_sent.format(DATETIME_FORMAT).to_string(),
            account_created: self.account_created,
            account_created_at: self
                .account_created_at
                .map(|d| d.format(DATETIME_FORMAT).to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PersonalMessage {
    pub id: i32,
    pub from: UserSummary,
    pub to: UserSummary,
    pub message: String,
    pub created: DateTime<Utc>,
}

impl PersonalMessage {
    pub fn into_dto(self) -> PersonalMessageDto {
        PersonalMessageDto {
            id: self.id,
            from: self.from.into_dto(),
            to: self.to.into_dto(),
            message: self.message,
            since: since(self.created, Utc::now()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreatePersonalMessageParams {
    pub from_user_id: String,
    pub to_user_id: String,
    pub message: String,
}
