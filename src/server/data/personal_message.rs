//! Personal message data repository for database operations.
//!
//! Messages are private between two users. Reads resolve both ends into
//! `UserSummary` values so callers never see raw user ids.

use std::collections::HashSet;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    data::user::UserRepository,
    model::user::{CreatePersonalMessageParams, PersonalMessage, UserSummary},
};

/// Repository providing database operations for personal messages.
pub struct PersonalMessageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PersonalMessageRepository<'a> {
    /// Creates a new PersonalMessageRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `PersonalMessageRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Messages sent in either direction between `a` and `b`, newest first.
    ///
    /// # Arguments
    /// - `a` - Id of one participant
    /// - `b` - Id of the other participant
    ///
    /// # Returns
    /// - `Ok(Vec<PersonalMessage>)` - The conversation with both ends resolved
    /// - `Err(DbErr)` - Database error
    pub async fn get_conversation(&self, a: &str, b: &str) -> Result<Vec<PersonalMessage>, DbErr> {
        use entity::personal_message::Column;

        let messages = entity::prelude::PersonalMessage::find()
            .filter(
                Condition::any()
                    .add(
                        Condition::all()
                            .add(Column::FromUserId.eq(a))
                            .add(Column::ToUserId.eq(b)),
                    )
                    .add(
                        Condition::all()
                            .add(Column::FromUserId.eq(b))
                            .add(Column::ToUserId.eq(a)),
                    ),
            )
            .order_by_desc(Column::Created)
            .order_by_desc(Column::Id)
            .all(self.db)
            .await?;

        let summaries = UserRepository::new(self.db)
            .get_summaries(&[a.to_string(), b.to_string()])
            .await?;
        let summary = |id: &str| {
            summaries
                .get(id)
                .cloned()
                .unwrap_or_else(|| UserSummary::unknown(id))
        };

        Ok(messages
            .into_iter()
            .map(|pm| PersonalMessage {
                from: summary(&pm.from_user_id),
                to: summary(&pm.to_user_id),
                id: pm.id,
                message: pm.message,
                created: pm.created,
            })
            .collect())
    }

    /// Users `user_id` has exchanged messages with, most recent conversation
    /// first, each listed once.
    ///
    /// # Arguments
    /// - `user_id` - Id of the user whose inbox is listed
    ///
    /// # Returns
    /// - `Ok(Vec<UserSummary>)` - Conversation partners
    /// - `Err(DbErr)` - Database error
    pub async fn get_conversation_partners(
        &self,
        user_id: &str,
    ) -> Result<Vec<UserSummary>, DbErr> {
        use entity::personal_message::Column;

        let messages = entity::prelude::PersonalMessage::find()
            .filter(
                Condition::any()
                    .add(Column::FromUserId.eq(user_id))
                    .add(Column::ToUserId.eq(user_id)),
            )
            .order_by_desc(Column::Created)
            .order_by_desc(Column::Id)
            .all(self.db)
            .await?;

        let mut seen = HashSet::new();
        let partner_ids: Vec<String> = messages
            .into_iter()
            .map(|m| {
                if m.from_user_id == user_id {
                    m.to_user_id
                } else {
                    m.from_user_id
                }
            })
            .filter(|partner| partner != user_id && seen.insert(partner.clone()))
            .collect();

        let summaries = UserRepository::new(self.db)
            .get_summaries(&partner_ids)
            .await?;

        Ok(partner_ids
            .iter()
            .map(|id| {
                summaries
                    .get(id)
                    .cloned()
                    .unwrap_or_else(|| UserSummary::unknown(id))
            })
            .collect())
    }

    /// Stores a message; the text is expected to be trimmed and non-empty.
    pub async fn create(&self, params: CreatePersonalMessageParams) -> Result<(), DbErr> {
        entity::personal_message::ActiveModel {
            from_user_id: ActiveValue::Set(params.from_user_id),
            to_user_id: ActiveValue::Set(params.to_user_id),
            message: ActiveValue::Set(params.message),
            created: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }
}
