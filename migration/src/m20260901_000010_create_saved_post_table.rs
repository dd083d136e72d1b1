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
                    .table(SavedPost::Table)
                    .if_not_exists()
                    .col(pk_auto(SavedPost::Id))
                    .col(integer(SavedPost::PostId))
                    .col(string(SavedPost::SavedByUserId))
                    .col(timestamp_with_time_zone(SavedPost::Created))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_saved_post_post_id")
                            .from(SavedPost::Table, SavedPost::PostId)
                            .to(Post::Table, Post::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_saved_post_saved_by_user_id")
                            .from(SavedPost::Table, SavedPost::SavedByUserId)
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
            .drop_table(Table::drop().table(SavedPost::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SavedPost {
    Table,
    Id,
    PostId,
    SavedByUserId,
    Created,
}
