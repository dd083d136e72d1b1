use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260901_000025_create_poll_table::Poll,
    m20260901_000026_create_poll_alternative_table::PollAlternative,
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
                    .table(PollVote::Table)
                    .if_not_exists()
                    .col(pk_auto(PollVote::Id))
                    .col(integer(PollVote::PollId))
                    .col(integer(PollVote::AlternativeId))
                    .col(string(PollVote::UserId))
                    .col(timestamp_with_time_zone(PollVote::Created))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_poll_vote_poll_id")
                            .from(PollVote::Table, PollVote::PollId)
                            .to(Poll::Table, Poll::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_poll_vote_alternative_id")
                            .from(PollVote::Table, PollVote::AlternativeId)
                            .to(PollAlternative::Table, PollAlternative::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_poll_vote_user_id")
                            .from(PollVote::Table, PollVote::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_poll_vote_poll_user")
                    .table(PollVote::Table)
                    .col(PollVote::PollId)
                    .col(PollVote::UserId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PollVote::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PollVote {
    Table,
    Id,
    PollId,
    AlternativeId,
    UserId,
    Created,
}
