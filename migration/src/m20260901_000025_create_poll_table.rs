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
                    .table(Poll::Table)
                    .if_not_exists()
                    .col(pk_auto(Poll::Id))
                    .col(string(Poll::Name))
                    .col(string_uniq(Poll::Slug))
                    .col(string(Poll::CreatedByUserId))
                    .col(timestamp_with_time_zone(Poll::Created))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_poll_created_by_user_id")
                            .from(Poll::Table, Poll::CreatedByUserId)
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
            .drop_table(Table::drop().table(Poll::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Poll {
    Table,
    Id,
    Name,
    Slug,
    CreatedByUserId,
    Created,
}
