use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::{role::RoleRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::{LoggedInUser, ROLE_ADMIN, ROLE_AUTHOR, ROLE_SCISSOR},
};

pub enum Permission {
    /// Member of the Admin role.
    Admin,
    /// Author or Admin, may write chronicles.
    Author,
    /// Admin or Scissor, may hide posts.
    Manager,
    /// The given user id is the requester, or the requester is an Admin.
    SelfOrAdmin(String),
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the logged in user, or `None` for anonymous visitors.
    ///
    /// A session that points at a deleted user counts as anonymous.
    pub async fn current(&self) -> Result<Option<LoggedInUser>, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Ok(None);
        };

        let Some(user) = UserRepository::new(self.db).find_by_id(&user_id).await? else {
            return Ok(None);
        };

        let roles = RoleRepository::new(self.db).get_for_user(&user.id).await?;

        Ok(Some(LoggedInUser { user, roles }))
    }

    /// Requires a logged in user holding every permission in `permissions`.
    ///
    /// # Returns
    /// - `Ok(LoggedInUser)` - User and roles of the requester
    /// - `Err(AuthError::UserNotInSession)` - Nobody is logged in
    /// - `Err(AuthError::UserNotInDatabase)` - Session user no longer exists
    /// - `Err(AuthError::AccessDenied)` - First permission the user lacks
    pub async fn require(&self, permissions: &[Permission]) -> Result<LoggedInUser, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = UserRepository::new(self.db).find_by_id(&user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        let roles = RoleRepository::new(self.db).get_for_user(&user.id).await?;
        let logged_in = LoggedInUser { user, roles };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !logged_in.is_admin() {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "User attempted an admin action without the Admin role".to_string(),
                        )
                        .into());
                    }
                }
                Permission::Author => {
                    if !(logged_in.has_role(ROLE_AUTHOR) || logged_in.has_role(ROLE_ADMIN)) {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "User attempted to write a chronicle without the Author role"
                                .to_string(),
                        )
                        .into());
                    }
                }
                Permission::Manager => {
                    if !(logged_in.has_role(ROLE_SCISSOR) || logged_in.has_role(ROLE_ADMIN)) {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "User attempted to manage posts without the Scissor role".to_string(),
                        )
                        .into());
                    }
                }
                Permission::SelfOrAdmin(target) => {
                    if !logged_in.is_self_or_admin(target) {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            format!("User attempted to act on behalf of user {}", target),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(logged_in)
    }
}
