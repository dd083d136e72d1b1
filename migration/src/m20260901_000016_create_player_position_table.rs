use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260901_000014_create_player_table::Player,
    m20260901_000015_create_position_table::Position,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlayerPosition::Table)
                    .if_not_exists()
                    .col(pk_auto(PlayerPosition::Id))
                    .col(integer(PlayerPosition::PlayerId))
                    .col(integer(PlayerPosition::PositionId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_position_player_id")
                            .from(PlayerPosition::Table, PlayerPosition::PlayerId)
                            .to(Player::Table, Player::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_position_position_id")
                            .from(PlayerPosition::Table, PlayerPosition::PositionId)
                            .to(Position::Table, Position::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PlayerPosition::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PlayerPosition {
    Table,
    Id,
    PlayerId,
    PositionId,
}
