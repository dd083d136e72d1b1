use chrono::{Duration, Utc};

use crate::server::{
    data::favorite_player::FavoritePlayerRepository,
    error::AppError,
    model::result::{NICK_TAKEN, REGION_NOT_FOUND, USER_NOT_FOUND},
    service::user::UserService,
};
use test_utils::{builder::TestBuilder, factory};

mod get_profile;
mod seclude;
mod set_favorite_player;
mod update_region;
