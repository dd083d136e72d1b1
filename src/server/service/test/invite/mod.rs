use crate::server::{
    error::AppError,
    model::result::{ACCOUNT_EXISTS, INVALID_EMAIL},
    service::invite::InviteService,
};
use test_utils::{builder::TestBuilder, factory};

mod create;
