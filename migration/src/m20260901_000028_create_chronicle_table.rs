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
                    .table(Chronicle::Table)
                    .if_not_exists()
                    .col(pk_auto(Chronicle::Id))
                    .col(string(Chronicle::Title))
                    .col(string_uniq(Chronicle::Slug))
                    .col(text(Chronicle::Text))
                    .col(string(Chronicle::WrittenByUserId))
                    .col(timestamp_with_time_zone(Chronicle::Created))
                    .col(timestamp_with_time_zone_null(Chronicle::Updated))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_chronicle_written_by_user_id")
                            .from(Chronicle::Table, Chronicle::WrittenByUserId)
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
            .drop_table(Table::drop().table(Chronicle::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Chronicle {
    Table,
    Id,
    Title,
    Slug,
    Text,
    WrittenByUserId,
    Created,
    Updated,
}
