//! Application state shared across all request handlers.
//!
//! `AppState` is built once at startup and cloned into every handler through Axum's
//! state extraction. Every field is cheap to clone: the `DatabaseConnection` is a
//! pool handle and the rest are small owned values.

use sea_orm::DatabaseConnection;
use std::path::PathBuf;

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool shared by every request.
    pub db: DatabaseConnection,

    /// Api base url embedded in rendered pages for the SPA.
    pub api_url: String,

    /// Root directory for uploaded files such as avatars.
    pub upload_dir: PathBuf,
}

impl AppState {
    pub fn new(db: DatabaseConnection, api_url: String, upload_dir: PathBuf) -> Self {
        Self {
            db,
            api_url,
            upload_dir,
        }
    }
}
