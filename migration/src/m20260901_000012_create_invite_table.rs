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
                    .table(Invite::Table)
                    .if_not_exists()
                    .col(pk_auto(Invite::Id))
                    .col(string(Invite::Email))
                    .col(string(Invite::InvitedByUserId))
                    .col(timestamp_with_time_zone(Invite::InviteSent))
                    .col(boolean(Invite::AccountCreated).default(false))
                    .col(timestamp_with_time_zone_null(Invite::AccountCreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_invite_invited_by_user_id")
                            .from(Invite::Table, Invite::InvitedByUserId)
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
            .drop_table(Table::drop().table(Invite::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Invite {
    Table,
    Id,
    Email,
    InvitedByUserId,
    InviteSent,
    AccountCreated,
    AccountCreatedAt,
}
