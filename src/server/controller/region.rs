use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, ResultDto},
        region::{CreateRegionDto, RegionDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::result::into_dtos,
        service::region::RegionService,
        state::AppState,
    },
};

/// Tag for grouping region endpoints in OpenAPI documentation
pub static REGION_TAG: &str = "region";

/// Regions by name, with how many users live in each.
#[utoipa::path(
    get,
    path = "/api/regions",
    tag = REGION_TAG,
    responses(
        (status = 200, description = "Regions", body = Vec<RegionDto>),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn get_regions(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let regions = RegionService::new(&state.db).get_all().await?;
    let dtos: Vec<RegionDto> = regions.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// # Access Control
/// - `Admin`
#[utoipa::path(
    post,
    path = "/api/regions/create",
    tag = REGION_TAG,
    request_body = CreateRegionDto,
    responses(
        (status = 200, description = "Created, or a failed result for a duplicate name", body = Vec<ResultDto>),
        (status = 400, description = "Empty name", body = ErrorDto),
        (status = 403, description = "Not an Admin", body = ErrorDto)
    ),
)]
pub async fn create_region(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateRegionDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let results = RegionService::new(&state.db).create(&payload.name).await?;

    Ok((StatusCode::OK, Json(into_dtos(results))))
}
