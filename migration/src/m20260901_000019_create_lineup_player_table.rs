use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260901_000018_create_lineup_table::Lineup,
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
                    .table(LineupPlayer::Table)
                    .if_not_exists()
                    .col(pk_auto(LineupPlayer::Id))
                    .col(integer(LineupPlayer::LineupId))
                    .col(integer(LineupPlayer::PlayerId))
                    .col(integer(LineupPlayer::PositionId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lineup_player_lineup_id")
                            .from(LineupPlayer::Table, LineupPlayer::LineupId)
                            .to(Lineup::Table, Lineup::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lineup_player_player_id")
                            .from(LineupPlayer::Table, LineupPlayer::PlayerId)
                            .to(Player::Table, Player::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lineup_player_position_id")
                            .from(LineupPlayer::Table, LineupPlayer::PositionId)
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
            .drop_table(Table::drop().table(LineupPlayer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum LineupPlayer {
    Table,
    Id,
    LineupId,
    PlayerId,
    PositionId,
}
