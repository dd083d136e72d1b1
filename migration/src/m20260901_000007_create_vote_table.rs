use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260901_000006_create_post_table::Post,
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
                    .table(Vote::Table)
                    .if_not_exists()
                    .col(pk_auto(Vote::Id))
                    .col(integer(Vote::VoteType))
                    .col(integer(Vote::PostId))
                    .col(string(Vote::CreatedByUserId))
                    .col(timestamp_with_time_zone(Vote::Created))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vote_post_id")
                            .from(Vote::Table, Vote::PostId)
                            .to(Post::Table, Post::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vote_created_by_user_id")
                            .from(Vote::Table, Vote::CreatedByUserId)
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
                    .name("idx_vote_post_user")
                    .table(Vote::Table)
                    .col(Vote::PostId)
                    .col(Vote::CreatedByUserId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Vote::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Vote {
    Table,
    Id,
    VoteType,
    PostId,
    CreatedByUserId,
    Created,
}
