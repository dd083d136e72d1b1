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
                    .table(Post::Table)
                    .if_not_exists()
                    .col(pk_auto(Post::Id))
                    .col(text(Post::Message))
                    .col(string(Post::CreatedByUserId))
                    .col(integer_null(Post::ParentPostId))
                    .col(timestamp_with_time_zone(Post::Created))
                    .col(timestamp_with_time_zone_null(Post::Updated))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_post_created_by_user_id")
                            .from(Post::Table, Post::CreatedByUserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_post_parent_post_id")
                            .from(Post::Table, Post::ParentPostId)
                            .to(Post::Table, Post::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Post::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Post {
    Table,
    Id,
    Message,
    CreatedByUserId,
    ParentPostId,
    Created,
    Updated,
}
