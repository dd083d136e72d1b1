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
        api::{ErrorDto, KeyValueDto, ResultDto},
        user::{CreatePersonalMessageDto, PersonalMessageDto},
    },
    server::{
        error::{auth::AuthError, AppError},
        middleware::auth::AuthGuard,
        model::{
            result::into_dtos,
            user::{CreatePersonalMessageParams, LoggedInUser},
        },
        service::personal_message::PersonalMessageService,
        state::AppState,
    },
};

/// Tag for grouping personal message endpoints in OpenAPI documentation
pub static PM_TAG: &str = "pm";

#[derive(Deserialize, IntoParams)]
pub struct ConversationQuery {
    /// The other party of the conversation
    pub to: String,
}

/// Personal messages are private even from Admins.
async fn require_owner(
    state: &AppState,
    session: &Session,
    user_id: &str,
) -> Result<LoggedInUser, AppError> {
    let viewer = AuthGuard::new(&state.db, session).require(&[]).await?;

    if viewer.id() != user_id {
        return Err(AuthError::AccessDenied(
            viewer.id().to_string(),
            format!("User attempted to read personal messages of {}", user_id),
        )
        .into());
    }

    Ok(viewer)
}

/// Messages between `user_id` and `to`, newest first.
///
/// # Access Control
/// - Only `user_id` itself
#[utoipa::path(
    get,
    path = "/api/users/{user_id}/pm",
    tag = PM_TAG,
    params(("user_id" = String, Path, description = "User id"), ConversationQuery),
    responses(
        (status = 200, description = "Conversation", body = Vec<PersonalMessageDto>),
        (status = 403, description = "Not the user", body = ErrorDto)
    ),
)]
pub async fn get_conversation(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<String>,
    Query(query): Query<ConversationQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = require_owner(&state, &session, &user_id).await?;

    let messages = PersonalMessageService::new(&state.db)
        .get_conversation(&user_id, &query.to)
        .await?;
    let dtos: Vec<PersonalMessageDto> = messages.into_iter().map(|m| m.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Users `user_id` has exchanged messages with.
#[utoipa::path(
    get,
    path = "/api/users/{user_id}/pm/conversations",
    tag = PM_TAG,
    params(("user_id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "Conversation partners", body = Vec<KeyValueDto>),
        (status = 403, description = "Not the user", body = ErrorDto)
    ),
)]
pub async fn get_conversation_partners(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = require_owner(&state, &session, &user_id).await?;

    let partners = PersonalMessageService::new(&state.db)
        .get_conversation_partners(&user_id)
        .await?;
    let dtos: Vec<KeyValueDto> = partners.into_iter().map(|p| p.into_key_value()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Sends a personal message from `user_id`.
///
/// # Returns
/// - `200 OK` - Message stored
/// - `400 Bad Request` - Empty message, nothing stored
/// - `403 Forbidden` - Sending as someone else
/// - `404 Not Found` - No such recipient
#[utoipa::path(
    post,
    path = "/api/users/{user_id}/pm/create",
    tag = PM_TAG,
    params(("user_id" = String, Path, description = "Sender id")),
    request_body = CreatePersonalMessageDto,
    responses(
        (status = 200, description = "Message sent", body = Vec<ResultDto>),
        (status = 400, description = "Empty message", body = ErrorDto),
        (status = 403, description = "Not the user", body = ErrorDto),
        (status = 404, description = "No such recipient", body = ErrorDto)
    ),
)]
pub async fn create_personal_message(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<String>,
    Json(payload): Json<CreatePersonalMessageDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = require_owner(&state, &session, &user_id).await?;

    let results = PersonalMessageService::new(&state.db)
        .create(CreatePersonalMessageParams {
            from_user_id: user_id,
            to_user_id: payload.to_user_id,
            message: payload.message,
        })
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(results))))
}
