use crate::server::{
    error::AppError, model::result::SLUG_TAKEN, service::chronicle::ChronicleService,
};
use test_utils::{builder::TestBuilder, factory};

mod create;
