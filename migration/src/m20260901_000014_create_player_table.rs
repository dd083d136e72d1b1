use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Player::Table)
                    .if_not_exists()
                    .col(pk_auto(Player::Id))
                    .col(string(Player::FirstName))
                    .col(string(Player::LastName))
                    .col(integer(Player::KitNumber))
                    .col(boolean(Player::IsCaptain).default(false))
                    .col(boolean(Player::IsOutOnLoan).default(false))
                    .col(boolean(Player::IsHereOnLoan).default(false))
                    .col(boolean(Player::IsSold).default(false))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Player::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Player {
    Table,
    Id,
    FirstName,
    LastName,
    KitNumber,
    IsCaptain,
    IsOutOnLoan,
    IsHereOnLoan,
    IsSold,
}
