use serde::{Deserialize, Serialize};

use crate::model::forum::FilterDto;

/// Boot data embedded in every server rendered page for the SPA.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageViewModelDto {
    pub api: String,
    pub logged_in_user: LoggedInUserDto,
    pub page: String,
    pub post_id: Option<i32>,
    pub page_number: Option<u64>,
    pub selected_id: Option<String>,
    pub selected_poll_slug: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggedInUserDto {
    pub id: String,
    pub name: String,
    pub nick: Option<String>,
    pub secluded_until: Option<String>,
    pub in_roles: Vec<String>,
    pub filter: FilterDto,
}
