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
                    .table(ScissoredPost::Table)
                    .if_not_exists()
                    .col(pk_auto(ScissoredPost::Id))
                    .col(integer_uniq(ScissoredPost::PostId))
                    .col(string(ScissoredPost::ScissoredByUserId))
                    .col(timestamp_with_time_zone(ScissoredPost::Created))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_scissored_post_post_id")
                            .from(ScissoredPost::Table, ScissoredPost::PostId)
                            .to(Post::Table, Post::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_scissored_post_scissored_by_user_id")
                            .from(ScissoredPost::Table, ScissoredPost::ScissoredByUserId)
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
            .drop_table(Table::drop().table(ScissoredPost::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ScissoredPost {
    Table,
    Id,
    PostId,
    ScissoredByUserId,
    Created,
}
