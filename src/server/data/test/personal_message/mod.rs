use crate::server::{
    data::personal_message::PersonalMessageRepository,
    model::user::CreatePersonalMessageParams,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_conversation;

fn pm(from: &str, to: &str, message: &str) -> CreatePersonalMessageParams {
    CreatePersonalMessageParams {
        from_user_id: from.to_string(),
        to_user_id: to.to_string(),
        message: message.to_string(),
    }
}
