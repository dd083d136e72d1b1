use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260901_000022_create_game_table::Game,
    m20260901_000014_create_player_table::Player,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlayerEvent::Table)
                    .if_not_exists()
                    .col(pk_auto(PlayerEvent::Id))
                    .col(integer(PlayerEvent::GameId))
                    .col(integer(PlayerEvent::PlayerId))
                    .col(integer(PlayerEvent::EventType))
                    .col(integer(PlayerEvent::InMinute))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_event_game_id")
                            .from(PlayerEvent::Table, PlayerEvent::GameId)
                            .to(Game::Table, Game::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_event_player_id")
                            .from(PlayerEvent::Table, PlayerEvent::PlayerId)
                            .to(Player::Table, Player::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PlayerEvent::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PlayerEvent {
    Table,
    Id,
    GameId,
    PlayerId,
    EventType,
    InMinute,
}
