use sea_orm_migration::{prelude::*, schema::*};

use super::m20260901_000025_create_poll_table::Poll;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PollAlternative::Table)
                    .if_not_exists()
                    .col(pk_auto(PollAlternative::Id))
                    .col(integer(PollAlternative::PollId))
                    .col(string(PollAlternative::Name))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_poll_alternative_poll_id")
                            .from(PollAlternative::Table, PollAlternative::PollId)
                            .to(Poll::Table, Poll::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PollAlternative::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PollAlternative {
    Table,
    Id,
    PollId,
    Name,
}
