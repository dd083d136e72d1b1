use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::forum::ForumUserDto;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChronicleDto {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub text: String,
    pub written_by: ForumUserDto,
    pub created: String,
    pub updated: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateChronicleDto {
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateChronicleDto {
    pub id: i32,
    pub title: String,
    pub text: String,
}
