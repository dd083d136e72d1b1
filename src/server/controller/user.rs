use axum::{
    extract::{Multipart, Path, Query, State},
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
        forum::{FilterDto, PostPageDto},
        user::{ResetPasswordDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{filter::Filter, result::into_dtos, result::EMPTY_IMAGE},
        service::{
            auth::AuthService, post::PostService, upload::UploadService, user::UserService,
        },
        state::AppState,
        util::parse::parse_date_or_datetime,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Multipart field carrying the avatar image.
const AVATAR_FIELD: &str = "file";

#[derive(Deserialize, IntoParams)]
pub struct PlayerQuery {
    pub player_id: i32,
}

#[derive(Deserialize, IntoParams)]
pub struct SecludeQuery {
    /// `YYYY-MM-DD` or RFC 3339
    pub to: String,
}

#[derive(Deserialize, IntoParams)]
pub struct NickQuery {
    pub nick: String,
}

#[derive(Deserialize, IntoParams)]
pub struct BioQuery {
    pub bio: Option<String>,
}

#[derive(Deserialize, IntoParams)]
pub struct RegionQuery {
    pub region_id: Option<i32>,
}

#[derive(Deserialize, IntoParams)]
pub struct RoleQuery {
    pub name: String,
}

/// Every user except the viewer, newest member first.
///
/// # Access Control
/// - Logged in
///
/// # Returns
/// - `200 OK` - Id and current nickname per user
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Users with their current nickname", body = Vec<KeyValueDto>),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let users = UserService::new(&state.db)
        .get_all_except(viewer.id())
        .await?;

    let dtos: Vec<KeyValueDto> = users.into_iter().map(|u| u.into_key_value()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Profile of a user.
///
/// # Returns
/// - `200 OK` - Profile
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - No such user
#[utoipa::path(
    get,
    path = "/api/users/{user_id}",
    tag = USER_TAG,
    params(("user_id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "User profile", body = UserDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "No such user", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let user = UserService::new(&state.db).get_profile(&user_id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Posts written by a user, five per page.
#[utoipa::path(
    get,
    path = "/api/users/{user_id}/posts/{page_id}",
    tag = USER_TAG,
    params(
        ("user_id" = String, Path, description = "User id"),
        ("page_id" = u64, Path, description = "1-based page number")
    ),
    responses(
        (status = 200, description = "Page of posts", body = PostPageDto),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn get_user_posts(
    State(state): State<AppState>,
    session: Session,
    Path((user_id, page_id)): Path<(String, u64)>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let page = PostService::new(&state.db)
        .get_user_posts(Some(viewer.id()), &user_id, page_id)
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto())))
}

/// Posts a user has saved, five per page.
#[utoipa::path(
    get,
    path = "/api/users/{user_id}/posts/saved/{page_id}",
    tag = USER_TAG,
    params(
        ("user_id" = String, Path, description = "User id"),
        ("page_id" = u64, Path, description = "1-based page number")
    ),
    responses(
        (status = 200, description = "Page of saved posts", body = PostPageDto),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn get_saved_posts(
    State(state): State<AppState>,
    session: Session,
    Path((user_id, page_id)): Path<(String, u64)>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let page = PostService::new(&state.db)
        .get_saved_posts(Some(viewer.id()), &user_id, page_id)
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto())))
}

/// Makes a player the user's favorite, replacing the previous one.
///
/// # Access Control
/// - `SelfOrAdmin` - The user, or an Admin
#[utoipa::path(
    post,
    path = "/api/users/{user_id}/player/add",
    tag = USER_TAG,
    params(("user_id" = String, Path, description = "User id"), PlayerQuery),
    responses(
        (status = 200, description = "Favorite player set", body = Vec<ResultDto>),
        (status = 403, description = "Not the user or an Admin", body = ErrorDto),
        (status = 404, description = "No such user or player", body = ErrorDto)
    ),
)]
pub async fn add_favorite_player(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<String>,
    Query(query): Query<PlayerQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::SelfOrAdmin(user_id.clone())])
        .await?;

    let results = UserService::new(&state.db)
        .set_favorite_player(&user_id, query.player_id)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(results))))
}

#[utoipa::path(
    post,
    path = "/api/users/{user_id}/player/remove",
    tag = USER_TAG,
    params(("user_id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "Favorite player removed", body = Vec<ResultDto>),
        (status = 403, description = "Not the user or an Admin", body = ErrorDto)
    ),
)]
pub async fn remove_favorite_player(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::SelfOrAdmin(user_id.clone())])
        .await?;

    let results = UserService::new(&state.db)
        .remove_favorite_player(&user_id)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(results))))
}

/// Bars a user from logging in until the given date.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - Seclusion stored
/// - `400 Bad Request` - Unparseable date
/// - `403 Forbidden` - Not an Admin
#[utoipa::path(
    post,
    path = "/api/users/{user_id}/seclude",
    tag = USER_TAG,
    params(("user_id" = String, Path, description = "User id"), SecludeQuery),
    responses(
        (status = 200, description = "User secluded", body = Vec<ResultDto>),
        (status = 400, description = "Unparseable date", body = ErrorDto),
        (status = 403, description = "Not an Admin", body = ErrorDto)
    ),
)]
pub async fn seclude(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<String>,
    Query(query): Query<SecludeQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let until = parse_date_or_datetime(&query.to)?;
    let results = UserService::new(&state.db).seclude(&user_id, until).await?;

    Ok((StatusCode::OK, Json(into_dtos(results))))
}

/// Sets a new password for a user.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - Password replaced
/// - `400 Bad Request` - Passwords differ or are too short
/// - `404 Not Found` - No such user
#[utoipa::path(
    post,
    path = "/api/users/{user_id}/password",
    tag = USER_TAG,
    params(("user_id" = String, Path, description = "User id")),
    request_body = ResetPasswordDto,
    responses(
        (status = 200, description = "Password replaced", body = Vec<ResultDto>),
        (status = 400, description = "Password rejected", body = ErrorDto),
        (status = 403, description = "Not an Admin", body = ErrorDto),
        (status = 404, description = "No such user", body = ErrorDto)
    ),
)]
pub async fn reset_password(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<String>,
    Json(dto): Json<ResetPasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let results = AuthService::new(&state.db)
        .reset_password(&user_id, &dto.password, &dto.confirm_password)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(results))))
}

/// Gives a user a new current nickname.
///
/// # Returns
/// - `200 OK` - Nickname stored
/// - `400 Bad Request` - Empty, or the current nickname of someone else
#[utoipa::path(
    post,
    path = "/api/users/{user_id}/nick/add",
    tag = USER_TAG,
    params(("user_id" = String, Path, description = "User id"), NickQuery),
    responses(
        (status = 200, description = "Nickname added", body = Vec<ResultDto>),
        (status = 400, description = "Nickname empty or taken", body = ErrorDto),
        (status = 403, description = "Not the user or an Admin", body = ErrorDto)
    ),
)]
pub async fn add_nick(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<String>,
    Query(query): Query<NickQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::SelfOrAdmin(user_id.clone())])
        .await?;

    let results = UserService::new(&state.db)
        .add_nick(&user_id, &query.nick)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(results))))
}

#[utoipa::path(
    post,
    path = "/api/users/{user_id}/bio",
    tag = USER_TAG,
    params(("user_id" = String, Path, description = "User id"), BioQuery),
    responses(
        (status = 200, description = "Bio updated", body = Vec<ResultDto>),
        (status = 403, description = "Not the user or an Admin", body = ErrorDto)
    ),
)]
pub async fn update_bio(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<String>,
    Query(query): Query<BioQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::SelfOrAdmin(user_id.clone())])
        .await?;

    let results = UserService::new(&state.db)
        .update_bio(&user_id, query.bio)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(results))))
}

/// Moves a user to a region; leaving `region_id` out clears it.
#[utoipa::path(
    post,
    path = "/api/users/{user_id}/region",
    tag = USER_TAG,
    params(("user_id" = String, Path, description = "User id"), RegionQuery),
    responses(
        (status = 200, description = "Region updated", body = Vec<ResultDto>),
        (status = 403, description = "Not the user or an Admin", body = ErrorDto),
        (status = 404, description = "No such region", body = ErrorDto)
    ),
)]
pub async fn update_region(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<String>,
    Query(query): Query<RegionQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::SelfOrAdmin(user_id.clone())])
        .await?;

    let results = UserService::new(&state.db)
        .update_region(&user_id, query.region_id)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(results))))
}

/// Replaces the avatar with the image in the `file` multipart field.
///
/// # Returns
/// - `200 OK` - Avatar stored
/// - `400 Bad Request` - Missing field, empty, too large or not an image
#[utoipa::path(
    post,
    path = "/api/users/{user_id}/avatar",
    tag = USER_TAG,
    params(("user_id" = String, Path, description = "User id")),
    request_body(content_type = "multipart/form-data", description = "Image in the `file` field"),
    responses(
        (status = 200, description = "Avatar replaced", body = Vec<ResultDto>),
        (status = 400, description = "Not an acceptable image", body = ErrorDto),
        (status = 403, description = "Not the user or an Admin", body = ErrorDto)
    ),
)]
pub async fn upload_avatar(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<String>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::SelfOrAdmin(user_id.clone())])
        .await?;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(AVATAR_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        let bytes = field.bytes().await?;

        let results = UploadService::new(&state.db, &state.upload_dir)
            .save_avatar(&user_id, &file_name, &bytes)
            .await?;

        return Ok((StatusCode::OK, Json(into_dtos(results))));
    }

    Err(AppError::BadRequest(EMPTY_IMAGE.to_string()))
}

/// Names of every role.
#[utoipa::path(
    get,
    path = "/api/users/roles",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Role names", body = Vec<String>),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn get_roles(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let roles = UserService::new(&state.db).get_role_names().await?;

    Ok((StatusCode::OK, Json(roles)))
}

/// Replaces the roles of a user with the posted list of role names.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    post,
    path = "/api/users/{user_id}/roles",
    tag = USER_TAG,
    params(("user_id" = String, Path, description = "User id")),
    request_body = Vec<String>,
    responses(
        (status = 200, description = "Roles replaced", body = Vec<ResultDto>),
        (status = 403, description = "Not an Admin", body = ErrorDto),
        (status = 404, description = "No such user", body = ErrorDto)
    ),
)]
pub async fn set_roles(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<String>,
    Json(role_names): Json<Vec<String>>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let results = UserService::new(&state.db)
        .set_roles(&user_id, &role_names)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(results))))
}

/// Members of a role.
#[utoipa::path(
    get,
    path = "/api/users/role",
    tag = USER_TAG,
    params(RoleQuery),
    responses(
        (status = 200, description = "Users in the role", body = Vec<KeyValueDto>),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn get_users_in_role(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<RoleQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let users = UserService::new(&state.db)
        .get_users_in_role(&query.name)
        .await?;

    let dtos: Vec<KeyValueDto> = users.into_iter().map(|u| u.into_key_value()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Creates or replaces the forum filter of a user.
#[utoipa::path(
    post,
    path = "/api/users/{user_id}/filter",
    tag = USER_TAG,
    params(("user_id" = String, Path, description = "User id")),
    request_body = FilterDto,
    responses(
        (status = 200, description = "Filter saved", body = Vec<ResultDto>),
        (status = 400, description = "Malformed date", body = ErrorDto),
        (status = 403, description = "Not the user or an Admin", body = ErrorDto)
    ),
)]
pub async fn update_filter(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<String>,
    Json(payload): Json<FilterDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::SelfOrAdmin(user_id.clone())])
        .await?;

    let filter = Filter::from_dto(payload)?;
    let results = UserService::new(&state.db)
        .update_filter(&user_id, filter)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(results))))
}
