use crate::server::data::favorite_player::FavoritePlayerRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod connect;
