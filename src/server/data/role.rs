//! Role data repository.
//!
//! Roles are seeded rows (Admin, Author, Scissor); membership lives in
//! `user_role`. Nothing here creates or renames roles.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::user::Account;

pub struct RoleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoleRepository<'a> {
    /// Creates a new RoleRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `RoleRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Names of every role, alphabetically.
    pub async fn get_all_names(&self) -> Result<Vec<String>, DbErr> {
        let roles = entity::prelude::Role::find()
            .order_by_asc(entity::role::Column::Name)
            .all(self.db)
            .await?;

        Ok(roles.into_iter().map(|r| r.name).collect())
    }

    /// Names of the roles `user_id` is a member of, alphabetically.
    ///
    /// # Arguments
    /// - `user_id` - Id of the member
    ///
    /// # Returns
    /// - `Ok(Vec<String>)` - Role names, empty for a user without roles
    /// - `Err(DbErr)` - Database error
    pub async fn get_for_user(&self, user_id: &str) -> Result<Vec<String>, DbErr> {
        let role_ids: Vec<i32> = entity::prelude::UserRole::find()
            .filter(entity::user_role::Column::UserId.eq(user_id))
            .all(self.db)
            .await?
            .into_iter()
            .map(|ur| ur.role_id)
            .collect();

        if role_ids.is_empty() {
            return Ok(Vec::new());
        }

        let roles = entity::prelude::Role::find()
            .filter(entity::role::Column::Id.is_in(role_ids))
            .order_by_asc(entity::role::Column::Name)
            .all(self.db)
            .await?;

        Ok(roles.into_iter().map(|r| r.name).collect())
    }

    /// Replaces the memberships of `user_id` with the named roles.
    ///
    /// Old memberships are removed and the new ones inserted in one
    /// transaction. Unknown role names are ignored.
    ///
    /// # Arguments
    /// - `user_id` - Id of the member
    /// - `role_names` - Names of the roles the user should hold afterwards
    ///
    /// # Returns
    /// - `Ok(Vec<String>)` - Names of the roles that were applied
    /// - `Err(DbErr)` - Database error; memberships are unchanged
    pub async fn set_for_user(
        &self,
        user_id: &str,
        role_names: &[String],
    ) -> Result<Vec<String>, DbErr> {
        let roles = if role_names.is_empty() {
            Vec::new()
        } else {
            entity::prelude::Role::find()
                .filter(entity::role::Column::Name.is_in(role_names.iter().cloned()))
                .all(self.db)
                .await?
        };

        let txn = self.db.begin().await?;

        entity::prelude::UserRole::delete_many()
            .filter(entity::user_role::Column::UserId.eq(user_id))
            .exec(&txn)
            .await?;

        for role in &roles {
            entity::user_role::ActiveModel {
                user_id: ActiveValue::Set(user_id.to_string()),
                role_id: ActiveValue::Set(role.id),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
        }

        txn.commit().await?;

        Ok(roles.into_iter().map(|r| r.name).collect())
    }

    /// Accounts holding the role called `name`, oldest membership first.
    ///
    /// # Arguments
    /// - `name` - Role name
    ///
    /// # Returns
    /// - `Ok(Vec<Account>)` - Members, empty for an unknown role
    /// - `Err(DbErr)` - Database error
    pub async fn get_users_in_role(&self, name: &str) -> Result<Vec<Account>, DbErr> {
        let Some(role) = entity::prelude::Role::find()
            .filter(entity::role::Column::Name.eq(name))
            .one(self.db)
            .await?
        else {
            return Ok(Vec::new());
        };

        let user_ids: Vec<String> = entity::prelude::UserRole::find()
            .filter(entity::user_role::Column::RoleId.eq(role.id))
            .order_by_asc(entity::user_role::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(|ur| ur.user_id)
            .collect();

        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut users: Vec<Account> = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(user_ids.iter().cloned()))
            .all(self.db)
            .await?
            .into_iter()
            .map(Account::from_entity)
            .collect();
        users.sort_by_key(|u| user_ids.iter().position(|id| *id == u.id));

        Ok(users)
    }
}
