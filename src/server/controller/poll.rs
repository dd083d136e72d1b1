use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, ResultDto},
        poll::{CreatePollDto, CreatePollVoteDto, PollDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, model::result::into_dtos,
        service::poll::PollService, state::AppState,
    },
};

/// Tag for grouping poll endpoints in OpenAPI documentation
pub static POLL_TAG: &str = "poll";

#[utoipa::path(
    get,
    path = "/api/polls",
    tag = POLL_TAG,
    responses(
        (status = 200, description = "Polls, newest first", body = Vec<PollDto>),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn get_polls(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let polls = PollService::new(&state.db).get_all(viewer.id()).await?;
    let dtos: Vec<PollDto> = polls.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/polls/{slug}",
    tag = POLL_TAG,
    params(("slug" = String, Path, description = "Poll slug")),
    responses(
        (status = 200, description = "Poll with vote counts", body = PollDto),
        (status = 404, description = "No such poll", body = ErrorDto)
    ),
)]
pub async fn get_poll(
    State(state): State<AppState>,
    session: Session,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let poll = PollService::new(&state.db)
        .get_by_slug(viewer.id(), &slug)
        .await?;

    Ok((StatusCode::OK, Json(poll.into_dto())))
}

/// Creates a poll; the slug is derived from the name.
///
/// # Returns
/// - `200 OK` - Created, or a failed result when the slug is taken
/// - `400 Bad Request` - Empty name or fewer than two alternatives
#[utoipa::path(
    post,
    path = "/api/polls/create",
    tag = POLL_TAG,
    request_body = CreatePollDto,
    responses(
        (status = 200, description = "Outcome of the creation", body = Vec<ResultDto>),
        (status = 400, description = "Poll rejected", body = ErrorDto)
    ),
)]
pub async fn create_poll(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreatePollDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let results = PollService::new(&state.db)
        .create(&payload.name, payload.alternatives, user.id())
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(results))))
}

/// Casts the logged in user's single vote in a poll.
#[utoipa::path(
    post,
    path = "/api/polls/{slug}/vote",
    tag = POLL_TAG,
    params(("slug" = String, Path, description = "Poll slug")),
    request_body = CreatePollVoteDto,
    responses(
        (status = 200, description = "Vote stored, or a failed result when already voted", body = Vec<ResultDto>),
        (status = 400, description = "Alternative not in this poll", body = ErrorDto),
        (status = 404, description = "No such poll", body = ErrorDto)
    ),
)]
pub async fn vote_in_poll(
    State(state): State<AppState>,
    session: Session,
    Path(slug): Path<String>,
    Json(payload): Json<CreatePollVoteDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let results = PollService::new(&state.db)
        .vote(&slug, payload.alternative_id, user.id())
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(results))))
}
