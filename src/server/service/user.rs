//! User service for profile business logic.
//!
//! Owns the rules around nicknames, favorite players, seclusion, roles and the
//! forum filter. Everything returned is a domain model; controllers convert to
//! DTOs.

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        favorite_player::FavoritePlayerRepository, filter::FilterRepository,
        nickname::NicknameRepository, post::PostRepository, region::RegionRepository,
        role::RoleRepository, squad::player::PlayerRepository, user::UserRepository,
    },
    error::AppError,
    model::{
        filter::Filter,
        result::{
            ActionResult, CREATE_FAVORITE_PLAYER, CREATE_NICK, DELETE_FAVORITE_PLAYER,
            EMPTY_NICK, NICK_TAKEN, PLAYER_NOT_FOUND, REGION_NOT_FOUND, SECLUDE_USER,
            UPDATE_BIO, UPDATE_FILTER, UPDATE_REGION, UPDATE_ROLES, USER_NOT_FOUND,
        },
        user::{Account, User, UserSummary},
    },
};

/// Service providing business logic for user profiles.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Every user except `viewer_id`, newest member first.
    pub async fn get_all_except(&self, viewer_id: &str) -> Result<Vec<UserSummary>, AppError> {
        let users = UserRepository::new(self.db).get_all_except(viewer_id).await?;
        let ids: Vec<String> = users.iter().map(|u| u.id.clone()).collect();
        let nicks = NicknameRepository::new(self.db).current_for_users(&ids).await?;

        Ok(users
            .iter()
            .map(|user| UserSummary::from_account(user, &nicks))
            .collect())
    }

    /// Assembles the full profile of `user_id`.
    ///
    /// # Returns
    /// - `Ok(User)` - Profile with nicknames, roles, region, favorite player,
    ///   post count and filter
    /// - `Err(AppError::NotFound)` - No such user
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_profile(&self, user_id: &str) -> Result<User, AppError> {
        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AppError::NotFound(USER_NOT_FOUND.to_string()));
        };

        let mut nicks = NicknameRepository::new(self.db)
            .get_for_user(user_id)
            .await?
            .into_iter();
        let nick = nicks.next();
        let previous_nicks: Vec<String> = nicks.collect();

        let roles = RoleRepository::new(self.db).get_for_user(user_id).await?;

        let region = match user.region_id {
            Some(region_id) => RegionRepository::new(self.db)
                .get_by_id(region_id)
                .await?
                .map(|r| r.name),
            None => None,
        };

        let favorite_player = FavoritePlayerRepository::new(self.db)
            .get_by_user(user_id)
            .await?;

        let number_of_posts = PostRepository::new(self.db).count_by_user(user_id).await?;
        let filter = self.get_filter(user_id).await?;

        Ok(User {
            id: user.id,
            email: user.email,
            nick,
            previous_nicks,
            bio: user.bio,
            avatar: user.avatar_file_name,
            region,
            roles,
            joined: user.joined,
            secluded_until: user.secluded_until,
            favorite_player,
            number_of_posts,
            filter,
        })
    }

    /// The saved forum filter of `user_id`, or the default one.
    pub async fn get_filter(&self, user_id: &str) -> Result<Filter, AppError> {
        Ok(FilterRepository::new(self.db)
            .get_by_user(user_id)
            .await?
            .unwrap_or_default())
    }

    /// Creates or replaces the forum filter of `user_id`.
    pub async fn update_filter(
        &self,
        user_id: &str,
        filter: Filter,
    ) -> Result<Vec<ActionResult>, AppError> {
        let filter_repo = FilterRepository::new(self.db);

        if !filter_repo.update(user_id, &filter).await? {
            filter_repo.create(user_id, &filter).await?;
        }

        Ok(vec![ActionResult::from_outcome(true, UPDATE_FILTER)])
    }

    /// Gives `user_id` a new current nickname.
    ///
    /// # Returns
    /// - `Ok(results)` - Nickname stored
    /// - `Err(AppError::BadRequest)` - Empty, or the current nickname of another user
    /// - `Err(AppError::NotFound)` - No such user
    pub async fn add_nick(&self, user_id: &str, nick: &str) -> Result<Vec<ActionResult>, AppError> {
        let nick = nick.trim();
        if nick.is_empty() {
            return Err(AppError::BadRequest(EMPTY_NICK.to_string()));
        }

        self.require_user(user_id).await?;

        let nick_repo = NicknameRepository::new(self.db);
        if nick_repo.is_taken_by_other_user(nick, user_id).await? {
            return Err(AppError::BadRequest(NICK_TAKEN.to_string()));
        }

        nick_repo.create(user_id, nick).await?;

        Ok(vec![ActionResult::from_outcome(true, CREATE_NICK)])
    }

    /// Sets the bio; a blank bio clears it.
    pub async fn update_bio(
        &self,
        user_id: &str,
        bio: Option<String>,
    ) -> Result<Vec<ActionResult>, AppError> {
        self.require_user(user_id).await?;

        let bio = bio
            .map(|b| b.trim().to_string())
            .filter(|b| !b.is_empty());

        let updated = UserRepository::new(self.db).update_bio(user_id, bio).await?;

        Ok(vec![ActionResult::from_outcome(updated, UPDATE_BIO)])
    }

    /// Moves `user_id` to `region_id`, or out of any region when `None`.
    pub async fn update_region(
        &self,
        user_id: &str,
        region_id: Option<i32>,
    ) -> Result<Vec<ActionResult>, AppError> {
        self.require_user(user_id).await?;

        if let Some(region_id) = region_id {
            if RegionRepository::new(self.db)
                .get_by_id(region_id)
                .await?
                .is_none()
            {
                return Err(AppError::NotFound(REGION_NOT_FOUND.to_string()));
            }
        }

        let updated = UserRepository::new(self.db)
            .set_region(user_id, region_id)
            .await?;

        Ok(vec![ActionResult::from_outcome(updated, UPDATE_REGION)])
    }

    /// Bars `user_id` from logging in until `until`.
    pub async fn seclude(
        &self,
        user_id: &str,
        until: DateTime<Utc>,
    ) -> Result<Vec<ActionResult>, AppError> {
        self.require_user(user_id).await?;

        let updated = UserRepository::new(self.db)
            .set_secluded_until(user_id, Some(until))
            .await?;

        if updated {
            tracing::info!("User {} secluded until {}", user_id, until);
        }

        Ok(vec![ActionResult::from_outcome(updated, SECLUDE_USER)])
    }

    /// Makes `player_id` the favorite player of `user_id`, replacing any
    /// previous favorite.
    pub async fn set_favorite_player(
        &self,
        user_id: &str,
        player_id: i32,
    ) -> Result<Vec<ActionResult>, AppError> {
        if PlayerRepository::new(self.db)
            .get_by_id(player_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(PLAYER_NOT_FOUND.to_string()));
        }
        self.require_user(user_id).await?;

        let favorite_repo = FavoritePlayerRepository::new(self.db);
        favorite_repo.delete_by_user(user_id).await?;
        favorite_repo.connect(user_id, player_id).await?;

        Ok(vec![ActionResult::from_outcome(true, CREATE_FAVORITE_PLAYER)])
    }

    pub async fn remove_favorite_player(
        &self,
        user_id: &str,
    ) -> Result<Vec<ActionResult>, AppError> {
        let removed = FavoritePlayerRepository::new(self.db)
            .delete_by_user(user_id)
            .await?;

        Ok(vec![ActionResult::from_outcome(removed, DELETE_FAVORITE_PLAYER)])
    }

    /// Names of every role, alphabetically.
    pub async fn get_role_names(&self) -> Result<Vec<String>, AppError> {
        Ok(RoleRepository::new(self.db).get_all_names().await?)
    }

    /// Replaces the roles of `user_id`. Unknown role names are ignored.
    pub async fn set_roles(
        &self,
        user_id: &str,
        role_names: &[String],
    ) -> Result<Vec<ActionResult>, AppError> {
        self.require_user(user_id).await?;

        let applied = RoleRepository::new(self.db)
            .set_for_user(user_id, role_names)
            .await?;

        tracing::info!("User {} now has roles {:?}", user_id, applied);

        Ok(vec![ActionResult::from_outcome(true, UPDATE_ROLES)])
    }

    pub async fn get_users_in_role(&self, role_name: &str) -> Result<Vec<UserSummary>, AppError> {
        let users = RoleRepository::new(self.db)
            .get_users_in_role(role_name)
            .await?;
        let ids: Vec<String> = users.iter().map(|u| u.id.clone()).collect();
        let nicks = NicknameRepository::new(self.db).current_for_users(&ids).await?;

        Ok(users
            .iter()
            .map(|user| UserSummary::from_account(user, &nicks))
            .collect())
    }

    async fn require_user(&self, user_id: &str) -> Result<Account, AppError> {
        UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))
    }
}
