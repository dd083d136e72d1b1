use sea_orm_migration::{prelude::*, schema::*};

use super::m20260901_000006_create_post_table::Post;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UrlTip::Table)
                    .if_not_exists()
                    .col(pk_auto(UrlTip::Id))
                    .col(integer(UrlTip::PostId))
                    .col(string(UrlTip::Href))
                    .col(integer(UrlTip::Clicks).default(0))
                    .col(timestamp_with_time_zone(UrlTip::Created))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_url_tip_post_id")
                            .from(UrlTip::Table, UrlTip::PostId)
                            .to(Post::Table, Post::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UrlTip::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UrlTip {
    Table,
    Id,
    PostId,
    Href,
    Clicks,
    Created,
}
