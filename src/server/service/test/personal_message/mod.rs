use crate::server::{
    error::AppError,
    model::{result::EMPTY_PM, user::CreatePersonalMessageParams},
    service::personal_message::PersonalMessageService,
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;

fn pm(from: &str, to: &str, message: &str) -> CreatePersonalMessageParams {
    CreatePersonalMessageParams {
        from_user_id: from.to_string(),
        to_user_id: to.to_string(),
        message: message.to_string(),
    }
}
