use sea_orm_migration::{prelude::*, schema::*};

use super::m20260901_000001_create_region_table::Region;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(string(User::Id).primary_key())
                    .col(string_uniq(User::Email))
                    .col(string(User::PasswordHash))
                    .col(text_null(User::Bio))
                    .col(string_null(User::AvatarFileName))
                    .col(timestamp_with_time_zone_null(User::SecludedUntil))
                    .col(integer_null(User::RegionId))
                    .col(timestamp_with_time_zone(User::Joined))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_region_id")
                            .from(User::Table, User::RegionId)
                            .to(Region::Table, Region::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    Table,
    Id,
    Email,
    PasswordHash,
    Bio,
    AvatarFileName,
    SecludedUntil,
    RegionId,
    Joined,
}
