//! Server rendered shells for the SPA.
//!
//! Every page requires a logged in user and embeds a `PageViewModelDto` the
//! client boots from. Anonymous visitors are sent to the login page with a
//! `return_url` back to where they came from.

use askama::Template;
use axum::{
    extract::{Path, State},
    http::Uri,
    response::{Html, IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use crate::{
    model::page::{LoggedInUserDto, PageViewModelDto},
    server::{
        data::nickname::NicknameRepository,
        error::AppError,
        middleware::auth::AuthGuard,
        model::user::LoggedInUser,
        service::user::UserService,
        state::AppState,
    },
};

#[derive(Template)]
#[template(path = "page.html")]
pub struct PageTemplate<'a> {
    pub title: &'a str,
    /// Serialized view model, safe to place inside a `<script>` element.
    pub model_json: String,
}

/// Which SPA view a page boots into, with its route parameters.
#[derive(Default)]
struct PageTarget {
    page: &'static str,
    title: &'static str,
    post_id: Option<i32>,
    page_number: Option<u64>,
    selected_id: Option<String>,
    selected_poll_slug: Option<String>,
}

impl PageTarget {
    fn new(page: &'static str, title: &'static str) -> Self {
        Self {
            page,
            title,
            ..Default::default()
        }
    }
}

pub async fn forum(State(state): State<AppState>, session: Session, uri: Uri) -> Result<Response, AppError> {
    let mut target = PageTarget::new("forum", "Forum");
    target.page_number = Some(1);

    render(&state, &session, &uri, target).await
}

pub async fn forum_page(
    State(state): State<AppState>,
    session: Session,
    uri: Uri,
    Path(page_number): Path<u64>,
) -> Result<Response, AppError> {
    let mut target = PageTarget::new("forum", "Forum");
    target.page_number = Some(page_number);

    render(&state, &session, &uri, target).await
}

pub async fn forum_post(
    State(state): State<AppState>,
    session: Session,
    uri: Uri,
    Path(post_id): Path<i32>,
) -> Result<Response, AppError> {
    let mut target = PageTarget::new("post", "Inlägg");
    target.post_id = Some(post_id);

    render(&state, &session, &uri, target).await
}

pub async fn profile(
    State(state): State<AppState>,
    session: Session,
    uri: Uri,
    Path(user_id): Path<String>,
) -> Result<Response, AppError> {
    let mut target = PageTarget::new("profile", "Profil");
    target.selected_id = Some(user_id);

    render(&state, &session, &uri, target).await
}

pub async fn squad(State(state): State<AppState>, session: Session, uri: Uri) -> Result<Response, AppError> {
    render(&state, &session, &uri, PageTarget::new("squad", "Trupp")).await
}

pub async fn polls(State(state): State<AppState>, session: Session, uri: Uri) -> Result<Response, AppError> {
    render(&state, &session, &uri, PageTarget::new("poll", "Omröstning")).await
}

pub async fn poll(
    State(state): State<AppState>,
    session: Session,
    uri: Uri,
    Path(slug): Path<String>,
) -> Result<Response, AppError> {
    let mut target = PageTarget::new("poll", "Omröstning");
    target.selected_poll_slug = Some(slug);

    render(&state, &session, &uri, target).await
}

async fn render(
    state: &AppState,
    session: &Session,
    uri: &Uri,
    target: PageTarget,
) -> Result<Response, AppError> {
    let Some(user) = AuthGuard::new(&state.db, session).current().await? else {
        return Ok(login_redirect(uri).into_response());
    };

    let model = PageViewModelDto {
        api: state.api_url.clone(),
        logged_in_user: logged_in_user_dto(state, user).await?,
        page: target.page.to_string(),
        post_id: target.post_id,
        page_number: target.page_number,
        selected_id: target.selected_id,
        selected_poll_slug: target.selected_poll_slug,
    };

    let template = PageTemplate {
        title: target.title,
        model_json: script_safe_json(&model)?,
    };

    Ok(Html(template.render()?).into_response())
}

async fn logged_in_user_dto(state: &AppState, user: LoggedInUser) -> Result<LoggedInUserDto, AppError> {
    let nick = NicknameRepository::new(&state.db)
        .current_for_user(user.id())
        .await?;
    let filter = UserService::new(&state.db).get_filter(user.id()).await?;

    Ok(LoggedInUserDto {
        id: user.user.id,
        name: user.user.email,
        nick,
        secluded_until: user.user.secluded_until.map(|until| until.to_rfc3339()),
        in_roles: user.roles,
        filter: filter.into_dto(),
    })
}

fn login_redirect(uri: &Uri) -> Redirect {
    let return_url = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/");
    let encoded: String = url::form_urlencoded::byte_serialize(return_url.as_bytes()).collect();

    Redirect::to(&format!("/auth/login?return_url={}", encoded))
}

/// Serializes `model` for embedding in a `<script>` element.
///
/// `<` is escaped so no value can close the element early.
fn script_safe_json(model: &PageViewModelDto) -> Result<String, AppError> {
    let json = serde_json::to_string(model)
        .map_err(|e| AppError::InternalError(format!("Failed to serialize page model: {}", e)))?;

    Ok(json.replace('<', "\\u003c"))
}
