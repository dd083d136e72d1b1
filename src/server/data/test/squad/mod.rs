use crate::server::{
    data::squad::{
        game::GameRepository, lineup::LineupRepository, player::PlayerRepository,
    },
    model::squad::{
        CreateGameParams, CreateLineupParams, CreatePlayerEventParams, CreatePlayerParams,
        UpdatePlayerParams,
    },
};
use chrono::NaiveDate;
use entity::{game::GameType, player_event::EventType};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod game;
mod lineup;
mod player;
