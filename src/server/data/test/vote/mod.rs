use crate::{
    model::forum::VoteTypeDto,
    server::{data::vote::VoteRepository, model::post::CreateVoteParams},
};
use entity::vote::VoteType;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};
