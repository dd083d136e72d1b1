use sea_orm::DatabaseConnection;

use crate::server::{
    data::{personal_message::PersonalMessageRepository, user::UserRepository},
    error::AppError,
    model::{
        result::{ActionResult, CREATE_PM, EMPTY_PM, USER_NOT_FOUND},
        user::{CreatePersonalMessageParams, PersonalMessage, UserSummary},
    },
};

pub struct PersonalMessageService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> PersonalMessageService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Messages exchanged between `user_id` and `other_user_id`, newest first.
    pub async fn get_conversation(
        &self,
        user_id: &str,
        other_user_id: &str,
    ) -> Result<Vec<PersonalMessage>, AppError> {
        Ok(PersonalMessageRepository::new(self.db)
            .get_conversation(user_id, other_user_id)
            .await?)
    }

    /// Users `user_id` has exchanged messages with, most recent conversation first.
    pub async fn get_conversation_partners(
        &self,
        user_id: &str,
    ) -> Result<Vec<UserSummary>, AppError> {
        Ok(PersonalMessageRepository::new(self.db)
            .get_conversation_partners(user_id)
            .await?)
    }

    /// Sends a message. Blank messages are rejected before anything is written.
    ///
    /// # Returns
    /// - `Ok(results)` - Message stored
    /// - `Err(AppError::BadRequest)` - Message is empty
    /// - `Err(AppError::NotFound)` - Recipient does not exist
    pub async fn create(
        &self,
        params: CreatePersonalMessageParams,
    ) -> Result<Vec<ActionResult>, AppError> {
        let message = params.message.trim().to_string();
        if message.is_empty() {
            return Err(AppError::BadRequest(EMPTY_PM.to_string()));
        }

        if UserRepository::new(self.db)
            .find_by_id(&params.to_user_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(USER_NOT_FOUND.to_string()));
        }

        PersonalMessageRepository::new(self.db)
            .create(CreatePersonalMessageParams { message, ..params })
            .await?;

        Ok(vec![ActionResult::from_outcome(true, CREATE_PM)])
    }
}
