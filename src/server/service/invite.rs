//! Invites gate registration: an account can only be created for an email
//! holding an unconsumed invite.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{invite::InviteRepository, user::UserRepository},
    error::AppError,
    model::{
        result::{invite_exists, ActionResult, ACCOUNT_EXISTS, CREATE_INVITE, INVALID_EMAIL},
        user::Invite,
    },
};

pub struct InviteService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> InviteService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// All invites, most recently sent first, with the inviter resolved.
    pub async fn get_all(&self) -> Result<Vec<Invite>, AppError> {
        Ok(InviteRepository::new(self.db).get_all().await?)
    }

    /// Whether `email` holds an invite that can still be used to register.
    pub async fn exists(&self, email: &str) -> Result<bool, AppError> {
        let email = normalize_email(email);
        Ok(InviteRepository::new(self.db)
            .active_exists_for_email(&email)
            .await?)
    }

    /// Invites `email` on behalf of `invited_by_user_id`.
    ///
    /// # Returns
    /// - `Ok(results)` - Invite stored
    /// - `Err(AppError::BadRequest)` - Malformed email, an account already uses
    ///   it, or an unconsumed invite already exists for it
    pub async fn create(
        &self,
        email: &str,
        invited_by_user_id: &str,
    ) -> Result<Vec<ActionResult>, AppError> {
        let email = normalize_email(email);
        if !is_plausible_email(&email) {
            return Err(AppError::BadRequest(INVALID_EMAIL.to_string()));
        }

        if UserRepository::new(self.db)
            .find_by_email(&email)
            .await?
            .is_some()
        {
            return Err(AppError::BadRequest(ACCOUNT_EXISTS.to_string()));
        }

        let invite_repo = InviteRepository::new(self.db);
        if invite_repo.active_exists_for_email(&email).await? {
            return Err(AppError::BadRequest(invite_exists(&email)));
        }

        invite_repo.create(&email, invited_by_user_id).await?;
        tracing::info!("User {} invited {}", invited_by_user_id, email);

        Ok(vec![ActionResult::from_outcome(true, CREATE_INVITE)])
    }
}

/// Emails are compared case insensitively and without surrounding whitespace.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.contains('@'),
        None => false,
    }
}
