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
                    .table(UserFilter::Table)
                    .if_not_exists()
                    .col(pk_auto(UserFilter::Id))
                    .col(string_uniq(UserFilter::UserId))
                    .col(integer(UserFilter::PostsPerPage).default(10))
                    .col(text(UserFilter::ExcludedUserIds).default(""))
                    .col(text(UserFilter::IncludedUserIds).default(""))
                    .col(date_null(UserFilter::FromDate))
                    .col(date_null(UserFilter::ToDate))
                    .col(integer(UserFilter::StartingEleven).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_filter_user_id")
                            .from(UserFilter::Table, UserFilter::UserId)
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
            .drop_table(Table::drop().table(UserFilter::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserFilter {
    Table,
    Id,
    UserId,
    PostsPerPage,
    ExcludedUserIds,
    IncludedUserIds,
    FromDate,
    ToDate,
    StartingEleven,
}
