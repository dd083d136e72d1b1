//! Invite factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an unconsumed invite for `email`.
pub async fn create_invite(
    db: &DatabaseConnection,
    email: impl Into<String>,
    invited_by_user_id: &str,
) -> Result<entity::invite::Model, DbErr> {
    entity::invite::ActiveModel {
        email: ActiveValue::Set(email.into()),
        invited_by_user_id: ActiveValue::Set(invited_by_user_id.to_string()),
        invite_sent: ActiveValue::Set(Utc::now()),
        account_created: ActiveValue::Set(false),
        account_created_at: ActiveValue::Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
}
