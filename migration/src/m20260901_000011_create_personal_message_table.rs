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
                    .table(PersonalMessage::Table)
                    .if_not_exists()
                    .col(pk_auto(PersonalMessage::Id))
                    .col(string(PersonalMessage::FromUserId))
                    .col(string(PersonalMessage::ToUserId))
                    .col(text(PersonalMessage::Message))
                    .col(timestamp_with_time_zone(PersonalMessage::Created))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_personal_message_from_user_id")
                            .from(PersonalMessage::Table, PersonalMessage::FromUserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_personal_message_to_user_id")
                            .from(PersonalMessage::Table, PersonalMessage::ToUserId)
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
            .drop_table(Table::drop().table(PersonalMessage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PersonalMessage {
    Table,
    Id,
    FromUserId,
    ToUserId,
    Message,
    Created,
}
