use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260901_000017_create_formation_table::Formation,
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
                    .table(Lineup::Table)
                    .if_not_exists()
                    .col(pk_auto(Lineup::Id))
                    .col(integer(Lineup::FormationId))
                    .col(string(Lineup::CreatedByUserId))
                    .col(timestamp_with_time_zone(Lineup::Created))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lineup_formation_id")
                            .from(Lineup::Table, Lineup::FormationId)
                            .to(Formation::Table, Formation::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lineup_created_by_user_id")
                            .from(Lineup::Table, Lineup::CreatedByUserId)
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
            .drop_table(Table::drop().table(Lineup::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Lineup {
    Table,
    Id,
    FormationId,
    CreatedByUserId,
    Created,
}
