//! Squad domain models: players, positions, formations, lineups, games and titles.

use chrono::{DateTime, NaiveDate, Utc};
use entity::{game::GameType, player_event::EventType, title::TitleType};

use crate::{
    model::squad::{
        CreateGameDto, CreateLineupDto, CreatePlayerDto, CreateTitleDto, EventTypeDto,
        FormationDto, GameDto, GameTypeDto, LineupDto, PlayerDto, PlayerEventDto,
        PlayerToLineupDto, PositionDto, TitleDto, TitleTypeDto, UpdatePlayerDto,
    },
    server::{error::AppError, util::formation::component_name},
};

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq)]
pub struct Position {
    pub id: i32,
    pub name: String,
}

impl Position {
    pub fn from_entity(entity: entity::position::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> PositionDto {
        PositionDto {
            id: self.id,
            name: self.name,
        }
    }
}

/// Player with the positions it can play and how many lineups it has been
/// picked for.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub kit_number: i32,
    pub is_captain: bool,
    pub is_out_on_loan: bool,
    pub is_here_on_loan: bool,
    pub is_sold: bool,
    pub positions: Vec<Position>,
    pub in_number_of_starting_elevens: u64,
}

impl Player {
    pub fn from_entity(
        entity: entity::player::Model,
        positions: Vec<entity::position::Model>,
        in_number_of_starting_elevens: u64,
    ) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            kit_number: entity.kit_number,
            is_captain: entity.is_captain,
            is_out_on_loan: entity.is_out_on_loan,
            is_here_on_loan: entity.is_here_on_loan,
            is_sold: entity.is_sold,
            positions: positions.into_iter().map(Position::from_entity).collect(),
            in_number_of_starting_elevens,
        }
    }

    /// Player view without positions or lineup count, as used for favorites.
    pub fn bare(entity: entity::player::Model) -> Self {
        Self::from_entity(entity, Vec::new(), 0)
    }

    pub fn into_dto(self) -> PlayerDto {
        PlayerDto {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            kit_number: self.kit_number,
            is_captain: self.is_captain,
            is_out_on_loan: self.is_out_on_loan,
            is_here_on_loan: self.is_here_on_loan,
            is_sold: self.is_sold,
            available_positions: self.positions.into_iter().map(Position::into_dto).collect(),
            in_number_of_starting_elevens: self.in_number_of_starting_elevens,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreatePlayerParams {
    pub first_name: String,
    pub last_name: String,
    pub kit_number: i32,
    pub is_captain: bool,
    pub is_out_on_loan: bool,
    pub is_here_on_loan: bool,
    pub position_ids: Vec<i32>,
}

impl CreatePlayerParams {
    pub fn from_dto(dto: CreatePlayerDto) -> Self {
        Self {
            first_name: dto.first_name.trim().to_string(),
            last_name: dto.last_name.trim().to_string(),
            kit_number: dto.kit_number,
            is_captain: dto.is_captain,
            is_out_on_loan: dto.is_out_on_loan,
            is_here_on_loan: dto.is_here_on_loan,
            position_ids: dto.available_position_ids,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdatePlayerParams {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub kit_number: i32,
    pub is_captain: bool,
    pub is_out_on_loan: bool,
    pub is_here_on_loan: bool,
    pub is_sold: bool,
    pub position_ids: Vec<i32>,
}

impl UpdatePlayerParams {
    pub fn from_dto(dto: UpdatePlayerDto) -> Self {
        Self {
            id: dto.id,
            first_name: dto.first_name.trim().to_string(),
            last_name: dto.last_name.trim().to_string(),
            kit_number: dto.kit_number,
            is_captain: dto.is_captain,
            is_out_on_loan: dto.is_out_on_loan,
            is_here_on_loan: dto.is_here_on_loan,
            is_sold: dto.is_sold,
            position_ids: dto.available_position_ids,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Formation {
    pub id: i32,
    pub name: String,
}

impl Formation {
    pub fn from_entity(entity: entity::formation::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> FormationDto {
        FormationDto {
            component_name: component_name(&self.name).map(str::to_string),
            id: self.id,
            name: self.name,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LineupPlayer {
    pub id: i32,
    pub player: Player,
    pub position: Position,
}

/// A starting eleven picked by a user.
#[derive(Debug, Clone)]
pub struct Lineup {
    pub id: i32,
    pub formation: Formation,
    pub players: Vec<LineupPlayer>,
    pub created: DateTime<Utc>,
}

impl Lineup {
    pub fn into_dto(self) -> LineupDto {
        LineupDto {
            id: self.id,
            formation: self.formation.into_dto(),
            players: self
                .players
                .into_iter()
                .map(|lp| PlayerToLineupDto {
                    id: lp.id,
                    player: lp.player.into_dto(),
                    position: lp.position.into_dto(),
                })
                .collect(),
            created: self.created.format(DATE_FORMAT).to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateLineupParams {
    pub formation_id: i32,
    pub created_by_user_id: String,
    /// `(player_id, position_id)` pairs.
    pub players: Vec<(i32, i32)>,
}

impl CreateLineupParams {
    pub fn from_dto(created_by_user_id: String, dto: CreateLineupDto) -> Self {
        Self {
            formation_id: dto.formation_id,
            created_by_user_id,
            players: dto
                .players
                .into_iter()
                .map(|p| (p.player_id, p.position_id))
                .collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlayerEvent {
    pub id: i32,
    pub player: Player,
    pub event_type: EventType,
    pub in_minute: i32,
}

#[derive(Debug, Clone)]
pub struct Game {
    pub id: i32,
    pub game_type: GameType,
    pub played_on: NaiveDate,
    pub events: Vec<PlayerEvent>,
}

impl Game {
    pub fn into_dto(self) -> GameDto {
        GameDto {
            id: self.id,
            game_type: game_type_dto(self.game_type),
            played_on: self.played_on.format(DATE_FORMAT).to_string(),
            player_events: self
                .events
                .into_iter()
                .map(|e| PlayerEventDto {
                    id: e.id,
                    player: e.player.into_dto(),
                    event_type: event_type_dto(e.event_type),
                    in_minute: e.in_minute,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreatePlayerEventParams {
    pub player_id: i32,
    pub event_type: EventType,
    pub in_minute: i32,
}

#[derive(Debug, Clone)]
pub struct CreateGameParams {
    pub game_type: GameType,
    pub played_on: NaiveDate,
    pub events: Vec<CreatePlayerEventParams>,
}

impl CreateGameParams {
    pub fn from_dto(dto: CreateGameDto) -> Result<Self, AppError> {
        let played_on = NaiveDate::parse_from_str(dto.played_on.trim(), DATE_FORMAT)
            .map_err(|_| AppError::BadRequest(format!("ogiltigt datum: {}", dto.played_on)))?;

        Ok(Self {
            game_type: game_type_from_dto(dto.game_type),
            played_on,
            events: dto
                .player_events
                .into_iter()
                .map(|e| CreatePlayerEventParams {
                    player_id: e.player_id,
                    event_type: event_type_from_dto(e.event_type),
                    in_minute: e.in_minute,
                })
                .collect(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct Title {
    pub id: i32,
    pub title_type: TitleType,
    pub year: i32,
    pub description: Option<String>,
}

impl Title {
    pub fn from_entity(entity: entity::title::Model) -> Self {
        Self {
            id: entity.id,
            title_type: entity.title_type,
            year: entity.year,
            description: entity.description,
        }
    }

    pub fn into_dto(self) -> TitleDto {
        TitleDto {
            id: self.id,
            title_type: match self.title_type {
                TitleType::League => TitleTypeDto::League,
                TitleType::Cup => TitleTypeDto::Cup,
                TitleType::SuperCup => TitleTypeDto::SuperCup,
            },
            year: self.year,
            description: self.description,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateTitleParams {
    pub title_type: TitleType,
    pub year: i32,
    pub description: Option<String>,
}

impl CreateTitleParams {
    pub fn from_dto(dto: CreateTitleDto) -> Self {
        Self {
            title_type: match dto.title_type {
                TitleTypeDto::League => TitleType::League,
                TitleTypeDto::Cup => TitleType::Cup,
                TitleTypeDto::SuperCup => TitleType::SuperCup,
            },
            year: dto.year,
            description: dto.description.filter(|d| !d.trim().is_empty()),
        }
    }
}

fn game_type_dto(game_type: GameType) -> GameTypeDto {
    match game_type {
        GameType::League => GameTypeDto::League,
        GameType::Cup => GameTypeDto::Cup,
        GameType::Europe => GameTypeDto::Europe,
        GameType::Friendly => GameTypeDto::Friendly,
    }
}

fn game_type_from_dto(dto: GameTypeDto) -> GameType {
    match dto {
        GameTypeDto::League => GameType::League,
        GameTypeDto::Cup => GameType::Cup,
        GameTypeDto::Europe => GameType::Europe,
        GameTypeDto::Friendly => GameType::Friendly,
    }
}

fn event_type_dto(event_type: EventType) -> EventTypeDto {
    match event_type {
        EventType::Goal => EventTypeDto::Goal,
        EventType::Assist => EventTypeDto::Assist,
        EventType::YellowCard => EventTypeDto::YellowCard,
        EventType::RedCard => EventTypeDto::RedCard,
        EventType::In => EventTypeDto::In,
        EventType::Out => EventTypeDto::Out,
    }
}

fn event_type_from_dto(dto: EventTypeDto) -> EventType {
    match dto {
        EventTypeDto::Goal => EventType::Goal,
        EventTypeDto::Assist => EventType::Assist,
        EventTypeDto::YellowCard => EventType::YellowCard,
        EventTypeDto::RedCard => EventType::RedCard,
        EventTypeDto::In => EventType::In,
        EventTypeDto::Out => EventType::Out,
    }
}
