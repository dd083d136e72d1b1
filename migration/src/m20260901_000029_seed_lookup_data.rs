use sea_orm_migration::prelude::*;

use super::{
    m20260901_000004_create_role_table::Role, m20260901_000015_create_position_table::Position,
    m20260901_000017_create_formation_table::Formation,
};

const ROLES: [&str; 3] = ["Admin", "Author", "Scissor"];

const POSITIONS: [&str; 7] = [
    "Målvakt",
    "Högerback",
    "Mittback",
    "Vänsterback",
    "Mittfältare",
    "Yttermittfältare",
    "Anfallare",
];

const FORMATIONS: [&str; 5] = ["4-4-2", "4-3-3", "4-5-1", "3-5-2", "4-2-3-1"];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut roles = Query::insert();
        roles.into_table(Role::Table).columns([Role::Name]);
        for name in ROLES {
            roles.values_panic([name.into()]);
        }
        manager.exec_stmt(roles).await?;

        let mut positions = Query::insert();
        positions
            .into_table(Position::Table)
            .columns([Position::Name]);
        for name in POSITIONS {
            positions.values_panic([name.into()]);
        }
        manager.exec_stmt(positions).await?;

        let mut formations = Query::insert();
        formations
            .into_table(Formation::Table)
            .columns([Formation::Name]);
        for name in FORMATIONS {
            formations.values_panic([name.into()]);
        }
        manager.exec_stmt(formations).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .exec_stmt(
                Query::delete()
                    .from_table(Formation::Table)
                    .and_where(Expr::col(Formation::Name).is_in(FORMATIONS))
                    .to_owned(),
            )
            .await?;

        manager
            .exec_stmt(
                Query::delete()
                    .from_table(Position::Table)
                    .and_where(Expr::col(Position::Name).is_in(POSITIONS))
                    .to_owned(),
            )
            .await?;

        manager
            .exec_stmt(
                Query::delete()
                    .from_table(Role::Table)
                    .and_where(Expr::col(Role::Name).is_in(ROLES))
                    .to_owned(),
            )
            .await
    }
}
