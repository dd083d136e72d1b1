use thiserror::Error;

/// Internal issues indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Argon2 failed to produce or parse a password hash.
    #[error("Failed to hash password: {0}")]
    PasswordHash(String),
}
