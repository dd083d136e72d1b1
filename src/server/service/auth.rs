//! Password login and invite based registration.
//!
//! Passwords are hashed with argon2 using a random salt; only the PHC string is
//! stored.

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::Utc;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{
        invite::InviteRepository, nickname::NicknameRepository, user::UserRepository,
    },
    error::{auth::AuthError, internal::InternalError, AppError},
    model::{
        result::{
            ActionResult, ACCOUNT_EXISTS, EMPTY_NICK, NICK_TAKEN, NO_INVITE, PASSWORDS_DIFFER,
            PASSWORD_TOO_SHORT, RESET_PASSWORD, USER_NOT_FOUND,
        },
        user::{Account, CreateUserParams},
    },
    service::invite::normalize_email,
};

pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Values posted by the registration form.
#[derive(Debug, Clone)]
pub struct RegisterParams {
    pub email: String,
    pub nick: String,
    pub password: String,
    pub confirm_password: String,
    pub bio: Option<String>,
}

pub struct AuthService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks credentials for a login attempt.
    ///
    /// # Returns
    /// - `Ok(account)` - Credentials valid and the user is not secluded
    /// - `Err(AuthError::AccountNotFound)` - Unknown email
    /// - `Err(AuthError::Secluded)` - Seclusion has not expired yet
    /// - `Err(AuthError::InvalidCredentials)` - Wrong password
    pub async fn login(&self, email: &str, password: &str) -> Result<Account, AppError> {
        let email = normalize_email(email);

        let Some(user) = UserRepository::new(self.db).find_by_email(&email).await? else {
            return Err(AuthError::AccountNotFound(email).into());
        };

        if let Some(until) = user.secluded_at(Utc::now()) {
            tracing::info!("Secluded user {} tried to log in", user.id);
            return Err(AuthError::Secluded(until).into());
        }

        if !verify_password(password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }

    /// Creates an account for an invited email and consumes the invite.
    ///
    /// The account, its first nickname and the invite are written in one
    /// transaction, so a failed registration leaves the invite usable.
    ///
    /// # Returns
    /// - `Ok(account)` - New user with its first nickname
    /// - `Err(AppError::BadRequest)` - Passwords differ or are too short, no
    ///   usable invite, email already registered, nickname empty or taken
    pub async fn register(&self, params: RegisterParams) -> Result<Account, AppError> {
        let email = normalize_email(&params.email);
        let nick = params.nick.trim();

        validate_password(&params.password, &params.confirm_password)?;
        if nick.is_empty() {
            return Err(AppError::BadRequest(EMPTY_NICK.to_string()));
        }

        if !InviteRepository::new(self.db)
            .active_exists_for_email(&email)
            .await?
        {
            return Err(AppError::BadRequest(NO_INVITE.to_string()));
        }

        let user_repo = UserRepository::new(self.db);
        if user_repo.find_by_email(&email).await?.is_some() {
            return Err(AppError::BadRequest(ACCOUNT_EXISTS.to_string()));
        }

        let user_id = Uuid::new_v4().to_string();
        if NicknameRepository::new(self.db)
            .is_taken_by_other_user(nick, &user_id)
            .await?
        {
            return Err(AppError::BadRequest(NICK_TAKEN.to_string()));
        }

        let bio = params
            .bio
            .map(|bio| bio.trim().to_string())
            .filter(|bio| !bio.is_empty());

        let Some(user) = user_repo
            .create(CreateUserParams {
                id: user_id,
                email,
                password_hash: hash_password(&params.password)?,
                nick: nick.to_string(),
                bio,
            })
            .await?
        else {
            return Err(AppError::BadRequest(NO_INVITE.to_string()));
        };

        tracing::info!("User {} registered as {}", user.id, nick);

        Ok(user)
    }

    /// Sets a new password for `user_id` on behalf of an admin.
    ///
    /// # Returns
    /// - `Ok(results)` - Password replaced
    /// - `Err(AppError::BadRequest)` - Passwords differ or are too short
    /// - `Err(AppError::NotFound)` - No such user
    pub async fn reset_password(
        &self,
        user_id: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<Vec<ActionResult>, AppError> {
        validate_password(password, confirm_password)?;

        let user_repo = UserRepository::new(self.db);
        if user_repo.find_by_id(user_id).await?.is_none() {
            return Err(AppError::NotFound(USER_NOT_FOUND.to_string()));
        }

        let updated = user_repo
            .set_password_hash(user_id, &hash_password(password)?)
            .await?;
        tracing::info!("Password reset for user {}", user_id);

        Ok(vec![ActionResult::from_outcome(updated, RESET_PASSWORD)])
    }
}

fn validate_password(password: &str, confirm_password: &str) -> Result<(), AppError> {
    if password != confirm_password {
        return Err(AppError::BadRequest(PASSWORDS_DIFFER.to_string()));
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AppError::BadRequest(PASSWORD_TOO_SHORT.to_string()));
    }

    Ok(())
}

/// Hashes `password` into a PHC string with a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt_bytes: [u8; 16] = rand::random();
    let salt = SaltString::encode_b64(&salt_bytes)
        .map_err(|e| InternalError::PasswordHash(e.to_string()))?;

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| InternalError::PasswordHash(e.to_string()))?;

    Ok(hash.to_string())
}

/// Whether `password` matches the stored PHC string `hash`.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let parsed =
        PasswordHash::new(hash).map_err(|e| InternalError::PasswordHash(e.to_string()))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
