//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for account rows. Registration
//! writes the account, its first nickname and the consumed invite in one
//! transaction. Lookups return `Account` domain models, and `get_summaries`
//! resolves the author summaries every listing shows next to content.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::{
    data::nickname::NicknameRepository,
    model::user::{Account, CreateUserParams, UserSummary},
};

/// Repository providing database operations for user accounts.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Every user except `user_id`, newest member first.
    ///
    /// # Arguments
    /// - `user_id` - Id of the user to leave out
    ///
    /// # Returns
    /// - `Ok(Vec<Account>)` - The other accounts ordered by join date descending
    /// - `Err(DbErr)` - Database error
    pub async fn get_all_except(&self, user_id: &str) -> Result<Vec<Account>, DbErr> {
        let users = entity::prelude::User::find()
            .filter(entity::user::Column::Id.ne(user_id))
            .order_by_desc(entity::user::Column::Joined)
            .all(self.db)
            .await?;

        Ok(users.into_iter().map(Account::from_entity).collect())
    }

    /// Finds an account by id.
    ///
    /// # Arguments
    /// - `user_id` - Id of the account
    ///
    /// # Returns
    /// - `Ok(Some(Account))` - Account found
    /// - `Ok(None)` - No account with that id
    /// - `Err(DbErr)` - Database error
    pub async fn find_by_id(&self, user_id: &str) -> Result<Option<Account>, DbErr> {
        let user = entity::prelude::User::find_by_id(user_id.to_string())
            .one(self.db)
            .await?;

        Ok(user.map(Account::from_entity))
    }

    /// Finds every account among `user_ids`. Unknown ids are skipped.
    ///
    /// # Arguments
    /// - `user_ids` - Ids to look up
    ///
    /// # Returns
    /// - `Ok(Vec<Account>)` - The accounts found, in no particular order
    /// - `Err(DbErr)` - Database error
    pub async fn find_by_ids(&self, user_ids: &[String]) -> Result<Vec<Account>, DbErr> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        let users = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(user_ids.iter().cloned()))
            .all(self.db)
            .await?;

        Ok(users.into_iter().map(Account::from_entity).collect())
    }

    /// Finds an account by its normalized email.
    ///
    /// # Arguments
    /// - `email` - Lowercased, trimmed email
    ///
    /// # Returns
    /// - `Ok(Some(Account))` - Account found
    /// - `Ok(None)` - Email not registered
    /// - `Err(DbErr)` - Database error
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DbErr> {
        let user = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(user.map(Account::from_entity))
    }

    /// Resolves author summaries for `user_ids`, keyed by id.
    ///
    /// Ids without an account are left out of the map; callers fall back to
    /// `UserSummary::unknown`.
    ///
    /// # Arguments
    /// - `user_ids` - Ids of the authors to resolve
    ///
    /// # Returns
    /// - `Ok(HashMap<String, UserSummary>)` - Summary per existing account
    /// - `Err(DbErr)` - Database error
    pub async fn get_summaries(
        &self,
        user_ids: &[String],
    ) -> Result<HashMap<String, UserSummary>, DbErr> {
        let users = self.find_by_ids(user_ids).await?;
        let nicks = NicknameRepository::new(self.db)
            .current_for_users(user_ids)
            .await?;

        Ok(users
            .iter()
            .map(|user| (user.id.clone(), UserSummary::from_account(user, &nicks)))
            .collect())
    }

    /// Creates an account from the active invite for its email.
    ///
    /// Inserts the user row and its first nickname, then consumes the invite,
    /// all in one transaction. When no unused invite is left at commit time
    /// the transaction is rolled back and nothing is written.
    ///
    /// # Arguments
    /// - `params` - Validated account values with the password already hashed
    ///
    /// # Returns
    /// - `Ok(Some(Account))` - Account created and invite consumed
    /// - `Ok(None)` - No unused invite for the email; nothing written
    /// - `Err(DbErr)` - Insert failed, e.g. the email is already registered
    pub async fn create(&self, params: CreateUserParams) -> Result<Option<Account>, DbErr> {
        let txn = self.db.begin().await?;
        let now = Utc::now();

        let user = entity::user::ActiveModel {
            id: ActiveValue::Set(params.id),
            email: ActiveValue::Set(params.email.clone()),
            password_hash: ActiveValue::Set(params.password_hash),
            bio: ActiveValue::Set(params.bio),
            avatar_file_name: ActiveValue::Set(None),
            secluded_until: ActiveValue::Set(None),
            region_id: ActiveValue::Set(None),
            joined: ActiveValue::Set(now),
        }
        .insert(&txn)
        .await?;

        entity::nickname::ActiveModel {
            user_id: ActiveValue::Set(user.id.clone()),
            nick: ActiveValue::Set(params.nick),
            created: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let consumed = entity::prelude::Invite::update_many()
            .filter(entity::invite::Column::Email.eq(params.email))
            .filter(entity::invite::Column::AccountCreated.eq(false))
            .col_expr(entity::invite::Column::AccountCreated, Expr::value(true))
            .col_expr(entity::invite::Column::AccountCreatedAt, Expr::value(Some(now)))
            .exec(&txn)
            .await?;

        if consumed.rows_affected == 0 {
            txn.rollback().await?;
            return Ok(None);
        }

        txn.commit().await?;

        Ok(Some(Account::from_entity(user)))
    }

    /// Sets or clears the bio.
    ///
    /// # Returns
    /// - `Ok(true)` - Account updated
    /// - `Ok(false)` - No account with that id
    /// - `Err(DbErr)` - Database error
    pub async fn update_bio(&self, user_id: &str, bio: Option<String>) -> Result<bool, DbErr> {
        let result = entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .col_expr(entity::user::Column::Bio, Expr::value(bio))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Replaces the stored password hash.
    ///
    /// # Arguments
    /// - `user_id` - Id of the account
    /// - `password_hash` - New argon2 PHC string
    ///
    /// # Returns
    /// - `Ok(true)` - Account updated
    /// - `Ok(false)` - No account with that id
    /// - `Err(DbErr)` - Database error
    pub async fn set_password_hash(
        &self,
        user_id: &str,
        password_hash: &str,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .col_expr(entity::user::Column::PasswordHash, Expr::value(password_hash))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Sets or lifts the seclusion end. Returns whether the account exists.
    pub async fn set_secluded_until(
        &self,
        user_id: &str,
        secluded_until: Option<DateTime<Utc>>,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .col_expr(
                entity::user::Column::SecludedUntil,
                Expr::value(secluded_until),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Points the account at a stored avatar file. Returns whether the account exists.
    pub async fn set_avatar_file_name(
        &self,
        user_id: &str,
        file_name: Option<String>,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .col_expr(entity::user::Column::AvatarFileName, Expr::value(file_name))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Moves the account into a region, or out of any with `None`.
    ///
    /// # Returns
    /// - `Ok(true)` - Account updated
    /// - `Ok(false)` - No account with that id
    /// - `Err(DbErr)` - Database error, e.g. an unknown region id
    pub async fn set_region(&self, user_id: &str, region_id: Option<i32>) -> Result<bool, DbErr> {
        let result = entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .col_expr(entity::user::Column::RegionId, Expr::value(region_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
