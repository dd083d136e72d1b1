//! Post factory for creating forum posts.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test posts.
///
/// # Example
///
/// ```rust,ignore
/// let reply = PostFactory::new(&db, &user.id)
///     .parent(original.id)
///     .build()
///     .await?;
/// ```
pub struct PostFactory<'a> {
    db: &'a DatabaseConnection,
    created_by_user_id: String,
    message: String,
    parent_post_id: Option<i32>,
    created: DateTime<Utc>,
}

impl<'a> PostFactory<'a> {
    /// Defaults to message `"Post {n}"` without parent, created now.
    pub fn new(db: &'a DatabaseConnection, created_by_user_id: &str) -> Self {
        Self {
            db,
            created_by_user_id: created_by_user_id.to_string(),
            message: format!("Post {}", next_id()),
            parent_post_id: None,
            created: Utc::now(),
        }
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn parent(mut self, parent_post_id: i32) -> Self {
        self.parent_post_id = Some(parent_post_id);
        self
    }

    pub fn created(mut self, created: DateTime<Utc>) -> Self {
        self.created = created;
        self
    }

    pub async fn build(self) -> Result<entity::post::Model, DbErr> {
        entity::post::ActiveModel {
            message: ActiveValue::Set(self.message),
            created_by_user_id: ActiveValue::Set(self.created_by_user_id),
            parent_post_id: ActiveValue::Set(self.parent_post_id),
            created: ActiveValue::Set(self.created),
            updated: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a post with default values authored by `user_id`.
pub async fn create_post(
    db: &DatabaseConnection,
    user_id: &str,
) -> Result<entity::post::Model, DbErr> {
    PostFactory::new(db, user_id).build().await
}

/// Adds a url tip with zero clicks to `post_id`.
pub async fn create_url_tip(
    db: &DatabaseConnection,
    post_id: i32,
    href: &str,
) -> Result<entity::url_tip::Model, DbErr> {
    entity::url_tip::ActiveModel {
        post_id: ActiveValue::Set(post_id),
        href: ActiveValue::Set(href.to_string()),
        clicks: ActiveValue::Set(0),
        created: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
