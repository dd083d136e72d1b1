//! User factory for creating test user entities.
//!
//! A user without a nickname cannot be shown anywhere in the forum, so the
//! factory always inserts a first nickname alongside the user row.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let user = UserFactory::new(&db)
///     .email("kalle@example.com")
///     .nick("Kalle")
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    email: String,
    nick: String,
    password_hash: String,
    bio: Option<String>,
    secluded_until: Option<DateTime<Utc>>,
    region_id: Option<i32>,
    joined: DateTime<Utc>,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - id: `"user-{n}"`
    /// - email: `"user{n}@example.com"`
    /// - nick: `"Nick {n}"`
    /// - password_hash: placeholder that matches no password
    /// - joined: now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            id: format!("user-{}", id),
            email: format!("user{}@example.com", id),
            nick: format!("Nick {}", id),
            password_hash: "not-a-hash".to_string(),
            bio: None,
            secluded_until: None,
            region_id: None,
            joined: Utc::now(),
        }
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn nick(mut self, nick: impl Into<String>) -> Self {
        self.nick = nick.into();
        self
    }

    /// Sets the stored password hash, e.g. one produced by the server's hasher.
    pub fn password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = password_hash.into();
        self
    }

    pub fn bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = Some(bio.into());
        self
    }

    pub fn secluded_until(mut self, secluded_until: DateTime<Utc>) -> Self {
        self.secluded_until = Some(secluded_until);
        self
    }

    pub fn region_id(mut self, region_id: i32) -> Self {
        self.region_id = Some(region_id);
        self
    }

    pub fn joined(mut self, joined: DateTime<Utc>) -> Self {
        self.joined = joined;
        self
    }

    /// Builds and inserts the user and its nickname.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let user = entity::user::ActiveModel {
            id: ActiveValue::Set(self.id),
            email: ActiveValue::Set(self.email),
            password_hash: ActiveValue::Set(self.password_hash),
            bio: ActiveValue::Set(self.bio),
            avatar_file_name: ActiveValue::Set(None),
            secluded_until: ActiveValue::Set(self.secluded_until),
            region_id: ActiveValue::Set(self.region_id),
            joined: ActiveValue::Set(self.joined),
        }
        .insert(self.db)
        .await?;

        entity::nickname::ActiveModel {
            user_id: ActiveValue::Set(user.id.clone()),
            nick: ActiveValue::Set(self.nick),
            created: ActiveValue::Set(self.joined),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(user)
    }
}

/// Creates a user with default values.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates a user whose first nickname is `nick`.
pub async fn create_user_with_nick(
    db: &DatabaseConnection,
    nick: impl Into<String>,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).nick(nick).build().await
}
