use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260901_000014_create_player_table::Player,
    m20260901_000002_create_user_table::User,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FavoritePlayer::Table)
                    .if_not_exists()
                    .col(pk_auto(FavoritePlayer::Id))
                    .col(string_uniq(FavoritePlayer::UserId))
                    .col(integer(FavoritePlayer::PlayerId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorite_player_user_id")
                            .from(FavoritePlayer::Table, FavoritePlayer::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorite_player_player_id")
                            .from(FavoritePlayer::Table, FavoritePlayer::PlayerId)
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
            .drop_table(Table::drop().table(FavoritePlayer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FavoritePlayer {
    Table,
    Id,
    UserId,
    PlayerId,
}
