use crate::server::data::role::RoleRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod set_for_user;
