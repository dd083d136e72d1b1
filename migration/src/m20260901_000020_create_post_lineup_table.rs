use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260901_000018_create_lineup_table::Lineup,
    m20260901_000006_create_post_table::Post,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PostLineup::Table)
                    .if_not_exists()
                    .col(pk_auto(PostLineup::Id))
                    .col(integer(PostLineup::PostId))
                    .col(integer(PostLineup::LineupId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_post_lineup_post_id")
                            .from(PostLineup::Table, PostLineup::PostId)
                            .to(Post::Table, Post::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_post_lineup_lineup_id")
                            .from(PostLineup::Table, PostLineup::LineupId)
                            .to(Lineup::Table, Lineup::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PostLineup::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PostLineup {
    Table,
    Id,
    PostId,
    LineupId,
}
