//! Player factory for creating squad players.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct PlayerFactory<'a> {
    db: &'a DatabaseConnection,
    first_name: String,
    last_name: String,
    kit_number: i32,
    is_captain: bool,
    is_sold: bool,
}

impl<'a> PlayerFactory<'a> {
    /// Defaults to an unsold, non-captain player with a generated name.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            first_name: format!("First {}", id),
            last_name: format!("Last {}", id),
            kit_number: (id % 99) as i32 + 1,
            is_captain: false,
            is_sold: false,
        }
    }

    pub fn name(mut self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self.last_name = last_name.into();
        self
    }

    pub fn kit_number(mut self, kit_number: i32) -> Self {
        self.kit_number = kit_number;
        self
    }

    pub fn captain(mut self, is_captain: bool) -> Self {
        self.is_captain = is_captain;
        self
    }

    pub fn sold(mut self, is_sold: bool) -> Self {
        self.is_sold = is_sold;
        self
    }

    pub async fn build(self) -> Result<entity::player::Model, DbErr> {
        entity::player::ActiveModel {
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            kit_number: ActiveValue::Set(self.kit_number),
            is_captain: ActiveValue::Set(self.is_captain),
            is_out_on_loan: ActiveValue::Set(false),
            is_here_on_loan: ActiveValue::Set(false),
            is_sold: ActiveValue::Set(self.is_sold),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_player(db: &DatabaseConnection) -> Result<entity::player::Model, DbErr> {
    PlayerFactory::new(db).build().await
}
