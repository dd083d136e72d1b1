//! Forum listing filter.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use entity::user_filter::StartingEleven;

use crate::{
    model::{
        api::KeyValueDto,
        forum::{FilterDto, StartingElevenDto},
    },
    server::{
        error::AppError,
        model::result::{INVALID_POSTS_PER_PAGE, TOO_MANY_FILTER_USERS},
        util::parse::{join_id_list, parse_id_list, parse_optional_date},
    },
};

pub const DEFAULT_POSTS_PER_PAGE: u64 = 10;
pub const MAX_POSTS_PER_PAGE: u64 = 100;
/// Bound on each user list, which is bound into the listing query as `IN` values.
pub const MAX_FILTER_USERS: usize = 200;

/// A user referenced by a filter, with the nickname shown in the filter form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserKey {
    pub id: String,
    pub nick: String,
}

impl UserKey {
    pub fn into_dto(self) -> KeyValueDto {
        KeyValueDto {
            key: self.id,
            value: self.nick,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    pub posts_per_page: u64,
    pub excluded_users: Vec<UserKey>,
    pub included_users: Vec<UserKey>,
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
    pub starting_eleven: StartingEleven,
}

impl Default for Filter {
    fn default() -> Self {
        Self {
            posts_per_page: DEFAULT_POSTS_PER_PAGE,
            excluded_users: Vec::new(),
            included_users: Vec::new(),
            from_date: None,
            to_date: None,
            starting_eleven: StartingEleven::All,
        }
    }
}

impl Filter {
    /// Builds the filter from the stored row, resolving user ids to nicknames
    /// through `nicks`. Ids without a nickname keep an empty display value.
    pub fn from_entity(entity: entity::user_filter::Model, nicks: &HashMap<String, String>) -> Self {
        let keys = |ids: &str| -> Vec<UserKey> {
            parse_id_list(ids)
                .into_iter()
                .take(MAX_FILTER_USERS)
                .map(|id| UserKey {
                    nick: nicks.get(&id).cloned().unwrap_or_default(),
                    id,
                })
                .collect()
        };

        Self {
            posts_per_page: entity.posts_per_page.max(1) as u64,
            excluded_users: keys(&entity.excluded_user_ids),
            included_users: keys(&entity.included_user_ids),
            from_date: entity.from_date,
            to_date: entity.to_date,
            starting_eleven: entity.starting_eleven,
        }
    }

    /// Converts a posted filter.
    ///
    /// A page size of 0 means the default; anything above
    /// `MAX_POSTS_PER_PAGE` is rejected, as are malformed dates. Repeated
    /// users are dropped, and a list longer than `MAX_FILTER_USERS` is rejected.
    pub fn from_dto(dto: FilterDto) -> Result<Self, AppError> {
        let posts_per_page = match dto.posts_per_page {
            0 => DEFAULT_POSTS_PER_PAGE,
            n if n > MAX_POSTS_PER_PAGE => {
                return Err(AppError::BadRequest(INVALID_POSTS_PER_PAGE.to_string()))
            }
            n => n,
        };

        let keys = |values: Vec<KeyValueDto>| -> Result<Vec<UserKey>, AppError> {
            let mut seen = HashSet::new();
            let keys: Vec<UserKey> = values
                .into_iter()
                .filter(|kv| seen.insert(kv.key.clone()))
                .map(|kv| UserKey {
                    id: kv.key,
                    nick: kv.value,
                })
                .collect();

            if keys.len() > MAX_FILTER_USERS {
                return Err(AppError::BadRequest(TOO_MANY_FILTER_USERS.to_string()));
            }
            Ok(keys)
        };

        Ok(Self {
            posts_per_page,
            excluded_users: keys(dto.excluded_users)?,
            included_users: keys(dto.included_users)?,
            from_date: parse_optional_date(dto.from_date.as_deref())?,
            to_date: parse_optional_date(dto.to_date.as_deref())?,
            starting_eleven: match dto.starting_eleven {
                StartingElevenDto::All => StartingEleven::All,
                StartingElevenDto::With => StartingEleven::With,
                StartingElevenDto::Without => StartingEleven::Without,
            },
        })
    }

    pub fn excluded_user_ids(&self) -> Vec<String> {
        self.excluded_users.iter().map(|u| u.id.clone()).collect()
    }

    pub fn included_user_ids(&self) -> Vec<String> {
        self.included_users.iter().map(|u| u.id.clone()).collect()
    }

    /// Comma separated ids as stored in `user_filter`.
    pub fn excluded_user_id_list(&self) -> String {
        join_id_list(self.excluded_users.iter().map(|u| u.id.as_str()))
    }

    pub fn included_user_id_list(&self) -> String {
        join_id_list(self.included_users.iter().map(|u| u.id.as_str()))
    }

    pub fn into_dto(self) -> FilterDto {
        FilterDto {
            posts_per_page: self.posts_per_page,
            excluded_users: self.excluded_users.into_iter().map(UserKey::into_dto).collect(),
            included_users: self.included_users.into_iter().map(UserKey::into_dto).collect(),
            from_date: self.from_date.map(|d| d.format("%Y-%m-%d").to_string()),
            to_date: self.to_date.map(|d| d.format("%Y-%m-%d").to_string()),
            starting_eleven: match self.starting_eleven {
                StartingEleven::All => StartingElevenDto::All,
                StartingEleven::With => StartingElevenDto::With,
                StartingEleven::Without => StartingElevenDto::Without,
            },
        }
    }
}
