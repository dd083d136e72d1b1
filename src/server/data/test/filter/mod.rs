use crate::server::{
    data::filter::FilterRepository,
    model::filter::{Filter, UserKey},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod save;
