use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "lineup_player")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub lineup_id: i32,
    pub player_id: i32,
    pub position_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::lineup::Entity",
        from = "Column::LineupId",
        to = "super::lineup::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Lineup,
    #[sea_orm(
        belongs_to = "super::player::Entity",
        from = "Column::PlayerId",
        to = "super::player::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Player,
    #[sea_orm(
        belongs_to = "super::position::Entity",
        from = "Column::PositionId",
        to = "super::position::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Position,
}

impl ActiveModelBehavior for ActiveModel {}
