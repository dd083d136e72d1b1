use crate::server::data::nickname::NicknameRepository;
use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use test_utils::{builder::TestBuilder, factory};

mod current_for_users;
mod is_taken_by_other_user;

/// Inserts a nickname with an explicit creation time.
async fn add_nick_at(
    db: &DatabaseConnection,
    user_id: &str,
    nick: &str,
    minutes_from_now: i64,
) -> Result<(), DbErr> {
    entity::nickname::ActiveModel {
        user_id: ActiveValue::Set(user_id.to_string()),
        nick: ActiveValue::Set(nick.to_string()),
        created: ActiveValue::Set(Utc::now() + Duration::minutes(minutes_from_now)),
        ..Default::default()
    }
    .insert(db)
    .await?;
    Ok(())
}
