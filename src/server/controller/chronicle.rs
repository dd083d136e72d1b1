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
        chronicle::{ChronicleDto, CreateChronicleDto, UpdateChronicleDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::result::into_dtos,
        service::chronicle::ChronicleService,
        state::AppState,
    },
};

/// Tag for grouping chronicle endpoints in OpenAPI documentation
pub static CHRONICLE_TAG: &str = "chronicle";

#[utoipa::path(
    get,
    path = "/api/chronicles",
    tag = CHRONICLE_TAG,
    responses(
        (status = 200, description = "Chronicles, newest first", body = Vec<ChronicleDto>),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn get_chronicles(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let chronicles = ChronicleService::new(&state.db).get_all().await?;
    let dtos: Vec<ChronicleDto> = chronicles.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/chronicles/{slug}",
    tag = CHRONICLE_TAG,
    params(("slug" = String, Path, description = "Chronicle slug")),
    responses(
        (status = 200, description = "Chronicle", body = ChronicleDto),
        (status = 404, description = "No such chronicle", body = ErrorDto)
    ),
)]
pub async fn get_chronicle(
    State(state): State<AppState>,
    session: Session,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let chronicle = ChronicleService::new(&state.db).get_by_slug(&slug).await?;

    Ok((StatusCode::OK, Json(chronicle.into_dto())))
}

/// Publishes a chronicle written by the logged in user.
///
/// # Access Control
/// - `Author` - Author or Admin
#[utoipa::path(
    post,
    path = "/api/chronicles/create",
    tag = CHRONICLE_TAG,
    request_body = CreateChronicleDto,
    responses(
        (status = 200, description = "Created, or a failed result when the slug is taken", body = Vec<ResultDto>),
        (status = 400, description = "Empty title", body = ErrorDto),
        (status = 403, description = "Neither Author nor Admin", body = ErrorDto)
    ),
)]
pub async fn create_chronicle(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateChronicleDto>,
) -> Result<impl IntoResponse, AppError> {
    let writer = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Author])
        .await?;

    let results = ChronicleService::new(&state.db)
        .create(&payload.title, &payload.text, writer.id())
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(results))))
}

/// # Access Control
/// - `Author` - Author or Admin
#[utoipa::path(
    post,
    path = "/api/chronicles/update",
    tag = CHRONICLE_TAG,
    request_body = UpdateChronicleDto,
    responses(
        (status = 200, description = "Updated, or a failed result when the slug is taken", body = Vec<ResultDto>),
        (status = 403, description = "Neither Author nor Admin", body = ErrorDto),
        (status = 404, description = "No such chronicle", body = ErrorDto)
    ),
)]
pub async fn update_chronicle(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpdateChronicleDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Author])
        .await?;

    let results = ChronicleService::new(&state.db)
        .update(payload.id, &payload.title, &payload.text)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(results))))
}
