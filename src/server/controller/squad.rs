use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{CreatedIdDto, ErrorDto, ResultDto},
        squad::{
            CreateGameDto, CreateLineupDto, CreatePlayerDto, CreateTitleDto, FormationDto,
            GameDto, LineupDto, PlayerDto, PositionDto, TitleDto, UpdatePlayerDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            result::into_dtos,
            squad::{
                CreateGameParams, CreateLineupParams, CreatePlayerParams, CreateTitleParams,
                UpdatePlayerParams,
            },
        },
        service::squad::SquadService,
        state::AppState,
    },
};

/// Tag for grouping squad endpoints in OpenAPI documentation
pub static SQUAD_TAG: &str = "squad";

/// Players currently in the squad, sold players excluded.
#[utoipa::path(
    get,
    path = "/api/squad/players",
    tag = SQUAD_TAG,
    responses(
        (status = 200, description = "Active players", body = Vec<PlayerDto>),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn get_players(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let players = SquadService::new(&state.db).get_players().await?;
    let dtos: Vec<PlayerDto> = players.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/squad/players/{player_id}",
    tag = SQUAD_TAG,
    params(("player_id" = i32, Path, description = "Player id")),
    responses(
        (status = 200, description = "Player", body = PlayerDto),
        (status = 404, description = "No such player", body = ErrorDto)
    ),
)]
pub async fn get_player(
    State(state): State<AppState>,
    session: Session,
    Path(player_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let player = SquadService::new(&state.db).get_player(player_id).await?;

    Ok((StatusCode::OK, Json(player.into_dto())))
}

/// # Access Control
/// - `Admin`
#[utoipa::path(
    post,
    path = "/api/squad/players/create",
    tag = SQUAD_TAG,
    request_body = CreatePlayerDto,
    responses(
        (status = 200, description = "Player created", body = Vec<ResultDto>),
        (status = 400, description = "Empty name", body = ErrorDto),
        (status = 403, description = "Not an Admin", body = ErrorDto)
    ),
)]
pub async fn create_player(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreatePlayerDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let results = SquadService::new(&state.db)
        .create_player(CreatePlayerParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(results))))
}

/// Updates a player and replaces its positions.
///
/// Marking the player sold removes it from every favorite list.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    post,
    path = "/api/squad/players/update",
    tag = SQUAD_TAG,
    request_body = UpdatePlayerDto,
    responses(
        (status = 200, description = "Player updated", body = Vec<ResultDto>),
        (status = 403, description = "Not an Admin", body = ErrorDto),
        (status = 404, description = "No such player", body = ErrorDto)
    ),
)]
pub async fn update_player(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpdatePlayerDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let results = SquadService::new(&state.db)
        .update_player(UpdatePlayerParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(results))))
}

#[utoipa::path(
    get,
    path = "/api/squad/positions",
    tag = SQUAD_TAG,
    responses((status = 200, description = "Positions", body = Vec<PositionDto>)),
)]
pub async fn get_positions(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let positions = SquadService::new(&state.db).get_positions().await?;
    let dtos: Vec<PositionDto> = positions.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/squad/formations",
    tag = SQUAD_TAG,
    responses((status = 200, description = "Formations", body = Vec<FormationDto>)),
)]
pub async fn get_formations(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let formations = SquadService::new(&state.db).get_formations().await?;
    let dtos: Vec<FormationDto> = formations.into_iter().map(|f| f.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/squad/lineups/{lineup_id}",
    tag = SQUAD_TAG,
    params(("lineup_id" = i32, Path, description = "Lineup id")),
    responses(
        (status = 200, description = "Lineup", body = LineupDto),
        (status = 404, description = "No such lineup", body = ErrorDto)
    ),
)]
pub async fn get_lineup(
    State(state): State<AppState>,
    session: Session,
    Path(lineup_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let lineup = SquadService::new(&state.db).get_lineup(lineup_id).await?;

    Ok((StatusCode::OK, Json(lineup.into_dto())))
}

/// The lineup attached to a post.
#[utoipa::path(
    get,
    path = "/api/squad/lineups/post/{post_id}",
    tag = SQUAD_TAG,
    params(("post_id" = i32, Path, description = "Post id")),
    responses(
        (status = 200, description = "Lineup of the post", body = LineupDto),
        (status = 404, description = "Post has no lineup", body = ErrorDto)
    ),
)]
pub async fn get_lineup_by_post(
    State(state): State<AppState>,
    session: Session,
    Path(post_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let lineup = SquadService::new(&state.db)
        .get_lineup_by_post(post_id)
        .await?;

    Ok((StatusCode::OK, Json(lineup.into_dto())))
}

/// Lineups a user has put together, newest first.
#[utoipa::path(
    get,
    path = "/api/squad/lineups/user/{user_id}",
    tag = SQUAD_TAG,
    params(("user_id" = String, Path, description = "User id")),
    responses((status = 200, description = "Lineups of the user", body = Vec<LineupDto>)),
)]
pub async fn get_user_lineups(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let lineups = SquadService::new(&state.db)
        .get_user_lineups(&user_id)
        .await?;
    let dtos: Vec<LineupDto> = lineups.into_iter().map(|l| l.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Saves a lineup by the logged in user and returns its id.
#[utoipa::path(
    post,
    path = "/api/squad/lineups/create",
    tag = SQUAD_TAG,
    request_body = CreateLineupDto,
    responses(
        (status = 200, description = "Id of the new lineup", body = CreatedIdDto),
        (status = 400, description = "Unknown formation or player", body = ErrorDto)
    ),
)]
pub async fn create_lineup(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateLineupDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let params = CreateLineupParams::from_dto(user.id().to_string(), payload);
    let id = SquadService::new(&state.db).create_lineup(params).await?;

    Ok((StatusCode::OK, Json(CreatedIdDto { id })))
}

#[utoipa::path(
    get,
    path = "/api/squad/games",
    tag = SQUAD_TAG,
    responses((status = 200, description = "Games, latest first", body = Vec<GameDto>)),
)]
pub async fn get_games(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let games = SquadService::new(&state.db).get_games().await?;
    let dtos: Vec<GameDto> = games.into_iter().map(|g| g.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// # Access Control
/// - `Admin`
#[utoipa::path(
    post,
    path = "/api/squad/games/create",
    tag = SQUAD_TAG,
    request_body = CreateGameDto,
    responses(
        (status = 200, description = "Game created", body = Vec<ResultDto>),
        (status = 400, description = "Malformed date or unknown player", body = ErrorDto),
        (status = 403, description = "Not an Admin", body = ErrorDto)
    ),
)]
pub async fn create_game(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateGameDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = CreateGameParams::from_dto(payload)?;
    let results = SquadService::new(&state.db).create_game(params).await?;

    Ok((StatusCode::OK, Json(into_dtos(results))))
}

#[utoipa::path(
    get,
    path = "/api/squad/titles",
    tag = SQUAD_TAG,
    responses((status = 200, description = "Titles won", body = Vec<TitleDto>)),
)]
pub async fn get_titles(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let titles = SquadService::new(&state.db).get_titles().await?;
    let dtos: Vec<TitleDto> = titles.into_iter().map(|t| t.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// # Access Control
/// - `Admin`
#[utoipa::path(
    post,
    path = "/api/squad/titles/create",
    tag = SQUAD_TAG,
    request_body = CreateTitleDto,
    responses(
        (status = 200, description = "Title created", body = Vec<ResultDto>),
        (status = 403, description = "Not an Admin", body = ErrorDto)
    ),
)]
pub async fn create_title(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateTitleDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let results = SquadService::new(&state.db)
        .create_title(CreateTitleParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(results))))
}
