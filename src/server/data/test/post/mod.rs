use crate::server::{
    data::post::PostRepository,
    model::filter::{Filter, UserKey},
};
use chrono::{Duration, NaiveDate, TimeZone, Utc};
use entity::user_filter::StartingEleven;
use sea_orm::{ActiveValue, DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_page;
mod get_saved_by_user;
mod update;
mod with_relations;

fn key(user: &entity::user::Model) -> UserKey {
    UserKey {
        id: user.id.clone(),
        nick: String::new(),
    }
}
