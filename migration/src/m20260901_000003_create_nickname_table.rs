use sea_orm_migration::{prelude::*, schema::*};

use super::m20260901_000002_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Nickname::Table)
                    .if_not_exists()
                    .col(pk_auto(Nickname::Id))
                    .col(string(Nickname::UserId))
                    .col(string(Nickname::Nick))
                    .col(timestamp_with_time_zone(Nickname::Created))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_nickname_user_id")
                            .from(Nickname::Table, Nickname::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Nickname::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Nickname {
    Table,
    Id,
    UserId,
    Nick,
    Created,
}
