use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required setting is neither in the environment nor in the settings file.
    ///
    /// Check `.env.example` or the `appsettings.{env}.json` file for the required keys.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Settings file exists but could not be read or parsed, or a value is malformed.
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),
}
