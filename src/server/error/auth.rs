use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id stored in the session; the visitor is not logged in.
    #[error("No user found in session")]
    UserNotInSession,

    /// Session refers to a user id that no longer exists.
    #[error("User {0} in session not found in database")]
    UserNotInDatabase(String),

    /// User is logged in but lacks the permission the endpoint requires.
    ///
    /// # Fields
    /// - User id of the requester
    /// - Description of the denied action, for the logs
    #[error("User {0} denied access: {1}")]
    AccessDenied(String, String),

    /// Login attempt with an email nobody registered.
    #[error("No account exists for {0}")]
    AccountNotFound(String),

    /// Login attempt with a password that does not match the stored hash.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Login attempt by a user whose seclusion has not expired yet.
    #[error("User is secluded until {0}")]
    Secluded(DateTime<Utc>),
}

impl AuthError {
    /// Message shown to the visitor on the login page.
    pub fn login_message(&self) -> String {
        match self {
            Self::AccountNotFound(_) => "kontot existerar inte. var god skapa ett nytt!".to_string(),
            Self::Secluded(until) => {
                format!("du är spärrad till och med {}", until.format("%Y-%m-%d %H:%M"))
            }
            _ => "felaktiga inloggningsuppgifter".to_string(),
        }
    }
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` / `UserNotInDatabase` → 401 Unauthorized
/// - `AccessDenied` → 403 Forbidden
/// - login failures → 400 Bad Request with the login message
///
/// Details are logged at debug level; the client only gets a generic message.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "You need to be logged in".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "Access denied".to_string(),
                }),
            )
                .into_response(),
            err => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: err.login_message(),
                }),
            )
                .into_response(),
        }
    }
}
