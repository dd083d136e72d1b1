use crate::server::{
    data::favorite_player::FavoritePlayerRepository,
    error::AppError,
    model::{
        result::INVALID_POSITION,
        squad::{CreateLineupParams, CreatePlayerParams, UpdatePlayerParams},
    },
    service::squad::SquadService,
};
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};

mod create_lineup;
mod update_player;
