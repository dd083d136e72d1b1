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
        forum::{CreatePostDto, CreateVoteDto, FilterDto, PostDto, PostPageDto, UpdatePostDto, UrlTipDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            filter::Filter,
            post::{CreatePostParams, CreateVoteParams, UpdatePostParams},
            result::into_dtos,
        },
        service::{post::PostService, user::UserService},
        state::AppState,
    },
};

/// Tag for grouping post endpoints in OpenAPI documentation
pub static POST_TAG: &str = "post";

/// One forum page, filtered by the viewer's saved filter.
///
/// # Returns
/// - `200 OK` - Posts of the page; an out of range page is empty
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    get,
    path = "/api/posts/page/{page_id}",
    tag = POST_TAG,
    params(("page_id" = u64, Path, description = "1-based page number")),
    responses(
        (status = 200, description = "Forum page", body = PostPageDto),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn get_forum_page(
    State(state): State<AppState>,
    session: Session,
    Path(page_id): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let filter = UserService::new(&state.db).get_filter(viewer.id()).await?;
    let page = PostService::new(&state.db)
        .get_forum_page(Some(viewer.id()), &filter, page_id)
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto())))
}

/// One forum page, filtered by the posted filter without saving it.
#[utoipa::path(
    post,
    path = "/api/posts/filter/{page_id}",
    tag = POST_TAG,
    params(("page_id" = u64, Path, description = "1-based page number")),
    request_body = FilterDto,
    responses(
        (status = 200, description = "Forum page", body = PostPageDto),
        (status = 400, description = "Malformed filter", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn filter_forum_page(
    State(state): State<AppState>,
    session: Session,
    Path(page_id): Path<u64>,
    Json(payload): Json<FilterDto>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let filter = Filter::from_dto(payload)?;
    let page = PostService::new(&state.db)
        .get_forum_page(Some(viewer.id()), &filter, page_id)
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/posts/{post_id}",
    tag = POST_TAG,
    params(("post_id" = i32, Path, description = "Post id")),
    responses(
        (status = 200, description = "Post with parent chain", body = PostDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "No such post", body = ErrorDto)
    ),
)]
pub async fn get_post(
    State(state): State<AppState>,
    session: Session,
    Path(post_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let post = PostService::new(&state.db)
        .get_post(Some(viewer.id()), post_id)
        .await?;

    Ok((StatusCode::OK, Json(post.into_dto())))
}

/// Writes a post as the logged in user.
///
/// # Returns
/// - `200 OK` - One result for the post and one per attached tip or lineup
/// - `400 Bad Request` - Empty message, malformed tip, unknown parent or lineup
#[utoipa::path(
    post,
    path = "/api/posts/create",
    tag = POST_TAG,
    request_body = CreatePostDto,
    responses(
        (status = 200, description = "Post created", body = Vec<ResultDto>),
        (status = 400, description = "Post rejected", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn create_post(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreatePostDto>,
) -> Result<impl IntoResponse, AppError> {
    let author = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let params = CreatePostParams::from_dto(author.id().to_string(), payload);
    let results = PostService::new(&state.db).create(params).await?;

    Ok((StatusCode::OK, Json(into_dtos(results))))
}

/// Edits a post.
///
/// # Access Control
/// - The author of the post, or an Admin
#[utoipa::path(
    post,
    path = "/api/posts/update",
    tag = POST_TAG,
    request_body = UpdatePostDto,
    responses(
        (status = 200, description = "Post updated", body = Vec<ResultDto>),
        (status = 400, description = "Post rejected", body = ErrorDto),
        (status = 403, description = "Neither author nor Admin", body = ErrorDto),
        (status = 404, description = "No such post", body = ErrorDto)
    ),
)]
pub async fn update_post(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpdatePostDto>,
) -> Result<impl IntoResponse, AppError> {
    let editor = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let results = PostService::new(&state.db)
        .update(&editor, UpdatePostParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(results))))
}

/// # Access Control
/// - `Admin`
#[utoipa::path(
    post,
    path = "/api/posts/{post_id}/delete",
    tag = POST_TAG,
    params(("post_id" = i32, Path, description = "Post id")),
    responses(
        (status = 200, description = "Post deleted", body = Vec<ResultDto>),
        (status = 403, description = "Not an Admin", body = ErrorDto),
        (status = 404, description = "No such post", body = ErrorDto)
    ),
)]
pub async fn delete_post(
    State(state): State<AppState>,
    session: Session,
    Path(post_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let results = PostService::new(&state.db).delete(post_id).await?;

    Ok((StatusCode::OK, Json(into_dtos(results))))
}

/// Hides a post from the forum listings.
///
/// # Access Control
/// - `Manager` - Admin or Scissor
#[utoipa::path(
    post,
    path = "/api/posts/{post_id}/scissor",
    tag = POST_TAG,
    params(("post_id" = i32, Path, description = "Post id")),
    responses(
        (status = 200, description = "Post scissored", body = Vec<ResultDto>),
        (status = 403, description = "Neither Admin nor Scissor", body = ErrorDto),
        (status = 404, description = "No such post", body = ErrorDto)
    ),
)]
pub async fn scissor_post(
    State(state): State<AppState>,
    session: Session,
    Path(post_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let manager = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Manager])
        .await?;

    let results = PostService::new(&state.db)
        .scissor(post_id, manager.id())
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(results))))
}

#[utoipa::path(
    post,
    path = "/api/posts/{post_id}/save",
    tag = POST_TAG,
    params(("post_id" = i32, Path, description = "Post id")),
    responses(
        (status = 200, description = "Post saved", body = Vec<ResultDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "No such post", body = ErrorDto)
    ),
)]
pub async fn save_post(
    State(state): State<AppState>,
    session: Session,
    Path(post_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let results = PostService::new(&state.db).save(post_id, user.id()).await?;

    Ok((StatusCode::OK, Json(into_dtos(results))))
}

/// Counts a click on the url tip of a post.
#[utoipa::path(
    post,
    path = "/api/posts/{post_id}/tip/click",
    tag = POST_TAG,
    params(("post_id" = i32, Path, description = "Post id")),
    responses(
        (status = 204, description = "Click counted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Post has no tip", body = ErrorDto)
    ),
)]
pub async fn click_tip(
    State(state): State<AppState>,
    session: Session,
    Path(post_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    PostService::new(&state.db).click_tip(post_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Votes on a post as the logged in user.
///
/// # Returns
/// - `200 OK` - Vote stored
/// - `400 Bad Request` - Own post, or already voted
#[utoipa::path(
    post,
    path = "/api/posts/vote",
    tag = POST_TAG,
    request_body = CreateVoteDto,
    responses(
        (status = 200, description = "Vote stored", body = Vec<ResultDto>),
        (status = 400, description = "Vote rejected", body = ErrorDto),
        (status = 404, description = "No such post", body = ErrorDto)
    ),
)]
pub async fn vote(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateVoteDto>,
) -> Result<impl IntoResponse, AppError> {
    let voter = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let params = CreateVoteParams::new(payload.vote_type, payload.post_id, voter.id().to_string());
    let results = PostService::new(&state.db).vote(params).await?;

    Ok((StatusCode::OK, Json(into_dtos(results))))
}

/// Every url tip, most clicked first.
#[utoipa::path(
    get,
    path = "/api/posts/tips",
    tag = POST_TAG,
    responses(
        (status = 200, description = "Url tips", body = Vec<UrlTipDto>),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn get_tips(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let tips = PostService::new(&state.db).get_tips().await?;
    let dtos: Vec<UrlTipDto> = tips.into_iter().map(|t| t.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
