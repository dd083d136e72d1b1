use crate::server::{
    error::AppError,
    model::result::{ALREADY_VOTED_POLL, SLUG_TAKEN},
    service::poll::PollService,
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod vote;

fn alternatives(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}
