use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PositionDto {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlayerDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub kit_number: i32,
    pub is_captain: bool,
    pub is_out_on_loan: bool,
    pub is_here_on_loan: bool,
    pub is_sold: bool,
    pub available_positions: Vec<PositionDto>,
    pub in_number_of_starting_elevens: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatePlayerDto {
    pub first_name: String,
    pub last_name: String,
    pub kit_number: i32,
    #[serde(default)]
    pub is_captain: bool,
    #[serde(default)]
    pub is_out_on_loan: bool,
    #[serde(default)]
    pub is_here_on_loan: bool,
    #[serde(default)]
    pub available_position_ids: Vec<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdatePlayerDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub kit_number: i32,
    pub is_captain: bool,
    pub is_out_on_loan: bool,
    pub is_here_on_loan: bool,
    pub is_sold: bool,
    pub available_position_ids: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FormationDto {
    pub id: i32,
    pub name: String,
    pub component_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PlayerToLineupDto {
    pub id: i32,
    pub player: PlayerDto,
    pub position: PositionDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LineupDto {
    pub id: i32,
    pub formation: FormationDto,
    pub players: Vec<PlayerToLineupDto>,
    /// `yyyy-MM-dd`
    pub created: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateLineupPlayerDto {
    pub player_id: i32,
    pub position_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateLineupDto {
    pub formation_id: i32,
    pub players: Vec<CreateLineupPlayerDto>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum GameTypeDto {
    League,
    Cup,
    Europe,
    Friendly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum EventTypeDto {
    Goal,
    Assist,
    YellowCard,
    RedCard,
    In,
    Out,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum TitleTypeDto {
    League,
    Cup,
    SuperCup,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PlayerEventDto {
    pub id: i32,
    pub player: PlayerDto,
    pub event_type: EventTypeDto,
    pub in_minute: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GameDto {
    pub id: i32,
    pub game_type: GameTypeDto,
    /// `yyyy-MM-dd`
    pub played_on: String,
    pub player_events: Vec<PlayerEventDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatePlayerEventDto {
    pub player_id: i32,
    pub event_type: EventTypeDto,
    pub in_minute: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateGameDto {
    pub game_type: GameTypeDto,
    /// `yyyy-MM-dd`
    pub played_on: String,
    #[serde(default)]
    pub player_events: Vec<CreatePlayerEventDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TitleDto {
    pub id: i32,
    pub title_type: TitleTypeDto,
    pub year: i32,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateTitleDto {
    pub title_type: TitleTypeDto,
    pub year: i32,
    pub description: Option<String>,
}
