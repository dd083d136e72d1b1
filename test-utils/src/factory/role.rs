//! Role factories.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a role with the given name.
pub async fn create_role(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::role::Model, DbErr> {
    entity::role::ActiveModel {
        name: ActiveValue::Set(name.into()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Grants `role_id` to `user_id`.
pub async fn assign_role(
    db: &DatabaseConnection,
    user_id: &str,
    role_id: i32,
) -> Result<entity::user_role::Model, DbErr> {
    entity::user_role::ActiveModel {
        user_id: ActiveValue::Set(user_id.to_string()),
        role_id: ActiveValue::Set(role_id),
        ..Default::default()
    }
    .insert(db)
    .await
}
