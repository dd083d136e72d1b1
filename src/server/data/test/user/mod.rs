use crate::server::{
    data::{invite::InviteRepository, nickname::NicknameRepository, user::UserRepository},
    model::user::CreateUserParams,
};
use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod update;
