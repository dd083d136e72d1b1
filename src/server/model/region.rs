use crate::model::region::RegionDto;

#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub id: i32,
    pub name: String,
    pub number_of_users: u64,
}

impl Region {
    pub fn from_entity(entity: entity::region::Model, number_of_users: u64) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            number_of_users,
        }
    }

    pub fn into_dto(self) -> RegionDto {
        RegionDto {
            id: self.id,
            name: self.name,
            number_of_users: self.number_of_users,
        }
    }
}
