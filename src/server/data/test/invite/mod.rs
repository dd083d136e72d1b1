use crate::server::{
    data::{invite::InviteRepository, user::UserRepository},
    model::user::CreateUserParams,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod active_exists_for_email;
mod get_all;
