use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub bio: Option<String>,
    pub avatar_file_name: Option<String>,
    pub secluded_until: Option<DateTimeUtc>,
    pub region_id: Option<i32>,
    pub joined: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::region::Entity",
        from = "Column::RegionId",
        to = "super::region::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Region,
    #[sea_orm(has_many = "super::nickname::Entity")]
    Nickname,
}

impl Related<super::region::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Region.def()
    }
}

impl Related<super::nickname::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Nickname.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
