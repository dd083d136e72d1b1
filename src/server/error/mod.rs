//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error type returned by controllers and services. It wraps
//! domain-specific errors and implements `IntoResponse`, so handlers can use `?` and
//! leave the status code mapping to this module.
//!
//! Unexpected failures (database, session, template, IO) are logged in full and answered
//! with an opaque `400 Bad Request` so no detail is surfaced to the client.

pub mod auth;
pub mod config;
pub mod internal;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, internal::InternalError},
};

/// Generic message returned for every failure that is not the client's fault.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong";

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for the 401/403 mapping.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// SQLx driver error, raised by the session store migration.
    #[error(transparent)]
    SqlxErr(#[from] sea_orm::SqlxError),

    /// Session store operation error.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// Page template failed to render.
    #[error(transparent)]
    TemplateErr(#[from] askama::Error),

    /// Filesystem or socket error.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Malformed multipart upload.
    #[error(transparent)]
    MultipartErr(#[from] axum::extract::multipart::MultipartError),

    /// Broken internal invariant.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Resource not found. Results in 404 with the provided message.
    #[error("{0}")]
    NotFound(String),

    /// Domain rule violation or invalid input. Results in 400 with the provided message.
    #[error("{0}")]
    BadRequest(String),

    /// Unexpected failure with a message meant for the logs only.
    #[error("{0}")]
    InternalError(String),
}

/// Maps each error variant to its HTTP response.
///
/// # Returns
/// - 400 Bad Request with message - For `BadRequest`
/// - 404 Not Found with message - For `NotFound`
/// - 401/403 - For `AuthErr`, delegated to `AuthError::into_response()`
/// - 400 Bad Request with generic message - For every other variant, logged at error level
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::BadRequest(msg) => {
                tracing::warn!("Rejected request: {}", msg);
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            err => OpaqueError(err).into_response(),
        }
    }
}

/// Wrapper turning any displayable error into the generic client error.
///
/// Logs the full error and answers with `400 Bad Request` and
/// [`GENERIC_ERROR_MESSAGE`].
pub struct OpaqueError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for OpaqueError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: GENERIC_ERROR_MESSAGE.to_string(),
            }),
        )
            .into_response()
    }
}
