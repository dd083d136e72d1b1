use sea_orm::entity::prelude::*;

/// Whether forum listings should show posts with a lineup attached.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum StartingEleven {
    #[sea_orm(num_value = 0)]
    All,
    #[sea_orm(num_value = 1)]
    With,
    #[sea_orm(num_value = 2)]
    Without,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_filter")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub user_id: String,
    pub posts_per_page: i32,
    /// Comma separated user ids.
    #[sea_orm(column_type = "Text")]
    pub excluded_user_ids: String,
    /// Comma separated user ids.
    #[sea_orm(column_type = "Text")]
    pub included_user_ids: String,
    pub from_date: Option<Date>,
    pub to_date: Option<Date>,
    pub starting_eleven: StartingEleven,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl ActiveModelBehavior for ActiveModel {}
