use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{ErrorDto, ResultDto},
        user::{CreateInviteDto, InviteDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::result::into_dtos,
        service::invite::InviteService,
        state::AppState,
    },
};

/// Tag for grouping invite endpoints in OpenAPI documentation
pub static INVITE_TAG: &str = "invite";

#[derive(Deserialize, IntoParams)]
pub struct EmailQuery {
    pub email: String,
}

/// Every invite, most recently sent first.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/users/invites",
    tag = INVITE_TAG,
    responses(
        (status = 200, description = "All invites", body = Vec<InviteDto>),
        (status = 403, description = "Not an Admin", body = ErrorDto)
    ),
)]
pub async fn get_invites(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let invites = InviteService::new(&state.db).get_all().await?;
    let dtos: Vec<InviteDto> = invites.into_iter().map(|i| i.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Whether an email holds an invite that can still be used.
///
/// Open to anonymous visitors so the registration form can check it.
#[utoipa::path(
    get,
    path = "/api/users/invites/exist",
    tag = INVITE_TAG,
    params(EmailQuery),
    responses(
        (status = 200, description = "Whether an active invite exists", body = bool)
    ),
)]
pub async fn invite_exists(
    State(state): State<AppState>,
    Query(query): Query<EmailQuery>,
) -> Result<impl IntoResponse, AppError> {
    let exists = InviteService::new(&state.db).exists(&query.email).await?;

    Ok((StatusCode::OK, Json(exists)))
}

/// Invites an email address on behalf of `user_id`.
///
/// # Access Control
/// - `Admin`, and the path must name the requester
///
/// # Returns
/// - `200 OK` - Invite stored
/// - `400 Bad Request` - Malformed email, existing account or active invite
/// - `403 Forbidden` - Not an Admin
#[utoipa::path(
    post,
    path = "/api/users/{user_id}/invites/add",
    tag = INVITE_TAG,
    params(("user_id" = String, Path, description = "Id of the inviting Admin")),
    request_body = CreateInviteDto,
    responses(
        (status = 200, description = "Invite created", body = Vec<ResultDto>),
        (status = 400, description = "Email rejected", body = ErrorDto),
        (status = 403, description = "Not an Admin", body = ErrorDto)
    ),
)]
pub async fn create_invite(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<String>,
    Json(payload): Json<CreateInviteDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin, Permission::SelfOrAdmin(user_id.clone())])
        .await?;

    let results = InviteService::new(&state.db)
        .create(&payload.email, &user_id)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(results))))
}
