//! Login, registration and logout pages.
//!
//! These are plain HTML forms posted outside the SPA; on success the user id is
//! stored in the session and the browser is redirected.

use askama::Template;
use axum::{
    extract::{Multipart, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::server::{
    error::AppError,
    middleware::session::AuthSession,
    service::{
        auth::{AuthService, RegisterParams},
        upload::UploadService,
    },
    state::AppState,
};

const LOGIN_TITLE: &str = "Logga in";
const REGISTER_TITLE: &str = "Skapa konto";

#[derive(Template)]
#[template(path = "auth.html")]
pub struct AuthTemplate<'a> {
    pub title: &'a str,
    pub action: &'a str,
    pub register: bool,
    pub error: Option<String>,
    pub email: &'a str,
    pub nick: &'a str,
    pub bio: &'a str,
    pub return_url: &'a str,
}

impl<'a> AuthTemplate<'a> {
    fn login(email: &'a str, return_url: &'a str, error: Option<String>) -> Self {
        Self {
            title: LOGIN_TITLE,
            action: "/auth/login",
            register: false,
            error,
            email,
            nick: "",
            bio: "",
            return_url,
        }
    }

    fn register(form: &'a RegisterForm, return_url: &'a str, error: Option<String>) -> Self {
        Self {
            title: REGISTER_TITLE,
            action: "/auth/register",
            register: true,
            error,
            email: &form.email,
            nick: &form.nick,
            bio: form.bio.as_str(),
            return_url,
        }
    }

    fn respond(&self, status: StatusCode) -> Result<Response, AppError> {
        Ok((status, Html(self.render()?)).into_response())
    }
}

#[derive(Deserialize)]
pub struct ReturnUrlQuery {
    pub return_url: Option<String>,
}

#[derive(Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub return_url: Option<String>,
}

/// Fields of the multipart registration form.
#[derive(Debug, Default)]
pub struct RegisterForm {
    pub email: String,
    pub nick: String,
    pub password: String,
    pub confirm_password: String,
    pub bio: String,
    pub return_url: Option<String>,
    /// Original file name and bytes of the avatar, when one was picked.
    pub avatar: Option<(String, Vec<u8>)>,
}

impl RegisterForm {
    /// Reads every known field; unknown fields are skipped.
    async fn from_multipart(multipart: &mut Multipart) -> Result<Self, AppError> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await? {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };

            match name.as_str() {
                "avatar" => {
                    let file_name = field.file_name().unwrap_or_default().to_string();
                    let bytes = field.bytes().await?;
                    if !bytes.is_empty() {
                        form.avatar = Some((file_name, bytes.to_vec()));
                    }
                }
                "email" => form.email = field.text().await?,
                "nick" => form.nick = field.text().await?,
                "password" => form.password = field.text().await?,
                "confirm_password" => form.confirm_password = field.text().await?,
                "bio" => form.bio = field.text().await?,
                "return_url" => form.return_url = Some(field.text().await?),
                _ => {}
            }
        }

        Ok(form)
    }
}

/// Only same-site paths are followed after login; anything else goes to `/`.
fn local_return_url(return_url: Option<&str>) -> &str {
    match return_url {
        Some(url)
            if url.starts_with('/')
                && !url.starts_with("//")
                && !url.starts_with("/\\")
                && !url.chars().any(|c| c.is_ascii_control()) =>
        {
            url
        }
        _ => "/",
    }
}

/// Renders the login form, or sends a logged in user to the forum.
pub async fn login_page(
    session: Session,
    Query(query): Query<ReturnUrlQuery>,
) -> Result<Response, AppError> {
    if AuthSession::new(&session).is_authenticated().await? {
        return Ok(Redirect::to("/").into_response());
    }

    let return_url = local_return_url(query.return_url.as_deref());

    AuthTemplate::login("", return_url, None).respond(StatusCode::OK)
}

/// Checks the posted credentials and logs the user in.
///
/// Login failures render the form again with the reason; seclusion,
/// unknown email and wrong password each have their own message.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    let return_url = local_return_url(form.return_url.as_deref());

    match AuthService::new(&state.db)
        .login(&form.email, &form.password)
        .await
    {
        Ok(user) => {
            AuthSession::new(&session).set_user_id(&user.id).await?;
            tracing::debug!("User {} logged in", user.id);

            Ok(Redirect::to(return_url).into_response())
        }
        Err(AppError::AuthErr(err)) => {
            AuthTemplate::login(&form.email, return_url, Some(err.login_message()))
                .respond(StatusCode::BAD_REQUEST)
        }
        Err(err) => Err(err),
    }
}

/// Renders the registration form, or sends a logged in user to the forum.
pub async fn register_page(
    session: Session,
    Query(query): Query<ReturnUrlQuery>,
) -> Result<Response, AppError> {
    if AuthSession::new(&session).is_authenticated().await? {
        return Ok(Redirect::to("/").into_response());
    }

    let form = RegisterForm::default();
    let return_url = local_return_url(query.return_url.as_deref());

    AuthTemplate::register(&form, return_url, None).respond(StatusCode::OK)
}

/// Creates an account from an invite and logs the new user in.
///
/// An avatar that cannot be stored does not undo the registration; the user
/// can upload another one from the profile.
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    mut multipart: Multipart,
) -> Result<Response, AppError> {
    let mut form = RegisterForm::from_multipart(&mut multipart).await?;
    let return_url = local_return_url(form.return_url.as_deref()).to_string();
    let avatar = form.avatar.take();

    let params = RegisterParams {
        email: form.email.clone(),
        nick: form.nick.clone(),
        password: std::mem::take(&mut form.password),
        confirm_password: std::mem::take(&mut form.confirm_password),
        bio: Some(form.bio.clone()),
    };

    match AuthService::new(&state.db).register(params).await {
        Ok(user) => {
            if let Some((file_name, bytes)) = avatar {
                if let Err(e) = UploadService::new(&state.db, &state.upload_dir)
                    .save_avatar(&user.id, &file_name, &bytes)
                    .await
                {
                    tracing::warn!("Avatar for new user {} not stored: {}", user.id, e);
                }
            }

            AuthSession::new(&session).set_user_id(&user.id).await?;

            Ok(Redirect::to(&return_url).into_response())
        }
        Err(AppError::BadRequest(message)) => {
            AuthTemplate::register(&form, &return_url, Some(message))
                .respond(StatusCode::BAD_REQUEST)
        }
        Err(err) => Err(err),
    }
}

pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await?;

    Ok(Redirect::to("/"))
}
