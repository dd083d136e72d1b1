use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Title::Table)
                    .if_not_exists()
                    .col(pk_auto(Title::Id))
                    .col(integer(Title::TitleType))
                    .col(integer(Title::Year))
                    .col(text_null(Title::Description))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Title::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Title {
    Table,
    Id,
    TitleType,
    Year,
    Description,
}
