//! Positions, formations and lineups.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub async fn create_position(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::position::Model, DbErr> {
    entity::position::ActiveModel {
        name: ActiveValue::Set(name.into()),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn create_formation(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::formation::Model, DbErr> {
    entity::formation::ActiveModel {
        name: ActiveValue::Set(name.into()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a lineup and one `lineup_player` row per `(player_id, position_id)`.
pub async fn create_lineup(
    db: &DatabaseConnection,
    formation_id: i32,
    created_by_user_id: &str,
    players: &[(i32, i32)],
) -> Result<entity::lineup::Model, DbErr> {
    let lineup = entity::lineup::ActiveModel {
        formation_id: ActiveValue::Set(formation_id),
        created_by_user_id: ActiveValue::Set(created_by_user_id.to_string()),
        created: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    for (player_id, position_id) in players {
        entity::lineup_player::ActiveModel {
            lineup_id: ActiveValue::Set(lineup.id),
            player_id: ActiveValue::Set(*player_id),
            position_id: ActiveValue::Set(*position_id),
            ..Default::default()
        }
        .insert(db)
        .await?;
    }

    Ok(lineup)
}

/// Shows `lineup_id` with `post_id`.
pub async fn connect_lineup(
    db: &DatabaseConnection,
    post_id: i32,
    lineup_id: i32,
) -> Result<entity::post_lineup::Model, DbErr> {
    entity::post_lineup::ActiveModel {
        post_id: ActiveValue::Set(post_id),
        lineup_id: ActiveValue::Set(lineup_id),
        ..Default::default()
    }
    .insert(db)
    .await
}
