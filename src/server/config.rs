use serde::Deserialize;
use std::{net::SocketAddr, path::PathBuf};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_ENVIRONMENT: &str = "development";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_API_URL: &str = "/api";
const DEFAULT_UPLOAD_DIR: &str = "uploads";

/// Values read from `appsettings.{env}.json`. Every key is optional; environment
/// variables take precedence.
#[derive(Deserialize, Default, Debug)]
#[serde(rename_all = "PascalCase")]
struct SettingsFile {
    database_url: Option<String>,
    bind_addr: Option<String>,
    api_url: Option<String>,
    upload_dir: Option<String>,
    session_secure: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub environment: String,
    pub database_url: String,
    pub bind_addr: SocketAddr,
    /// Base url of the JSON api as seen by the browser, embedded in every page.
    pub api_url: String,
    pub upload_dir: PathBuf,
    /// Whether the session cookie is flagged `Secure`.
    pub session_secure: bool,
}

impl Config {
    /// Loads configuration from `.env`, the optional settings file and the environment.
    ///
    /// Environment variable names: `DIFFEN_ENV`, `DATABASE_URL`, `BIND_ADDR`, `API_URL`,
    /// `UPLOAD_DIR`, `SESSION_SECURE`.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required settings present
    /// - `Err(AppError::ConfigErr(MissingEnvVar))` - `DATABASE_URL` missing from both sources
    /// - `Err(AppError::ConfigErr(InvalidSettings))` - Unreadable settings file or malformed value
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let environment =
            std::env::var("DIFFEN_ENV").unwrap_or_else(|_| DEFAULT_ENVIRONMENT.to_string());

        let path = format!("appsettings.{}.json", environment);
        let file = match std::fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str::<SettingsFile>(&contents)
                .map_err(|e| ConfigError::InvalidSettings(format!("{}: {}", path, e)))?,
            Err(_) => SettingsFile::default(),
        };

        Self::from_sources(environment, file, |key| std::env::var(key).ok())
    }

    fn from_sources(
        environment: String,
        file: SettingsFile,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, AppError> {
        let database_url = env("DATABASE_URL")
            .or(file.database_url)
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let bind_addr = env("BIND_ADDR")
            .or(file.bind_addr)
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidSettings(format!("BIND_ADDR '{}': {}", bind_addr, e)))?;

        let session_secure = match env("SESSION_SECURE") {
            Some(value) => value
                .parse::<bool>()
                .map_err(|e| ConfigError::InvalidSettings(format!("SESSION_SECURE: {}", e)))?,
            None => file.session_secure.unwrap_or(false),
        };

        Ok(Self {
            environment,
            database_url,
            bind_addr,
            api_url: env("API_URL")
                .or(file.api_url)
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            upload_dir: PathBuf::from(
                env("UPLOAD_DIR")
                    .or(file.upload_dir)
                    .unwrap_or_else(|| DEFAULT_UPLOAD_DIR.to_string()),
            ),
            session_secure,
        })
    }
}
