//! Invite data repository.
//!
//! An invite is consumed when an account is created for its email; consuming
//! happens inside `UserRepository::create` so the two cannot drift apart.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::user::UserRepository,
    model::user::{Invite, UserSummary},
};

pub struct InviteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InviteRepository<'a> {
    /// Creates a new InviteRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `InviteRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// All invites, most recently sent first, with the inviter resolved.
    ///
    /// # Returns
    /// - `Ok(Vec<Invite>)` - Invites; an inviter without an account is shown
    ///   as an unknown user
    /// - `Err(DbErr)` - Database error
    pub async fn get_all(&self) -> Result<Vec<Invite>, DbErr> {
        let invites = entity::prelude::Invite::find()
            .order_by_desc(entity::invite::Column::InviteSent)
            .order_by_desc(entity::invite::Column::Id)
            .all(self.db)
            .await?;

        let mut inviter_ids: Vec<String> = invites
            .iter()
            .map(|i| i.invited_by_user_id.clone())
            .collect();
        inviter_ids.sort();
        inviter_ids.dedup();
        let summaries = UserRepository::new(self.db)
            .get_summaries(&inviter_ids)
            .await?;

        Ok(invites
            .into_iter()
            .map(|invite| {
                let invited_by = summaries
                    .get(&invite.invited_by_user_id)
                    .cloned()
                    .unwrap_or_else(|| UserSummary::unknown(&invite.invited_by_user_id));
                Invite::from_entity(invite, invited_by)
            })
            .collect())
    }

    /// Whether `email` has an invite that has not been used to create an account.
    pub async fn active_exists_for_email(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Invite::find()
            .filter(entity::invite::Column::Email.eq(email))
            .filter(entity::invite::Column::AccountCreated.eq(false))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Stores an unconsumed invite for `email`.
    ///
    /// # Arguments
    /// - `email` - Normalized email of the invitee
    /// - `invited_by_user_id` - Id of the inviting user
    ///
    /// # Returns
    /// - `Ok(())` - Invite stored
    /// - `Err(DbErr)` - Insert failed
    pub async fn create(&self, email: &str, invited_by_user_id: &str) -> Result<(), DbErr> {
        entity::invite::ActiveModel {
            email: ActiveValue::Set(email.to_string()),
            invited_by_user_id: ActiveValue::Set(invited_by_user_id.to_string()),
            invite_sent: ActiveValue::Set(Utc::now()),
            account_created: ActiveValue::Set(false),
            account_created_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }
}
