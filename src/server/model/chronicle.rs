use chrono::{DateTime, Utc};

use crate::{
    model::chronicle::ChronicleDto,
    server::model::user::UserSummary,
};

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// A longer editorial text written by an author.
#[derive(Debug, Clone)]
pub struct Chronicle {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub text: String,
    pub written_by: UserSummary,
    pub created: DateTime<Utc>,
    pub updated: Option<DateTime<Utc>>,
}

impl Chronicle {
    pub fn from_entity(entity: entity::chronicle::Model, written_by: UserSummary) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            slug: entity.slug,
            text: entity.text,
            written_by,
            created: entity.created,
            updated: entity.updated,
        }
    }

    pub fn into_dto(self) -> ChronicleDto {
        ChronicleDto {
            id: self.id,
            title: self.title,
            slug: self.slug,
            text: self.text,
            written_by: self.written_by.into_dto(),
            created: self.created.format(DATETIME_FORMAT).to_string(),
            updated: self.updated.map(|d| d.format(DATETIME_FORMAT).to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateChronicleParams {
    pub title: String,
    pub slug: String,
    pub text: String,
    pub written_by_user_id: String,
}

#[derive(Debug, Clone)]
pub struct UpdateChronicleParams {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub text: String,
}
