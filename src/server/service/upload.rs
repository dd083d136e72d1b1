//! Avatar uploads stored on disk under the configured upload directory.

use std::path::Path;

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::result::{
        ActionResult, EMPTY_IMAGE, IMAGE_TOO_LARGE, UNSUPPORTED_IMAGE, UPDATE_AVATAR,
        USER_NOT_FOUND,
    },
};

/// Subdirectory of the upload root holding avatars.
pub const AVATAR_DIR: &str = "avatars";

pub const MAX_AVATAR_BYTES: usize = 5 * 1024 * 1024;

const ALLOWED_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "webp"];

pub struct UploadService<'a> {
    pub db: &'a DatabaseConnection,
    pub upload_dir: &'a Path,
}

impl<'a> UploadService<'a> {
    pub fn new(db: &'a DatabaseConnection, upload_dir: &'a Path) -> Self {
        Self { db, upload_dir }
    }

    /// Stores `bytes` as the new avatar of `user_id` and drops the previous file.
    ///
    /// The file is saved under a random name keeping the original extension.
    ///
    /// # Returns
    /// - `Ok(results)` - Avatar replaced
    /// - `Err(AppError::BadRequest)` - Empty, too large, or not an image extension
    /// - `Err(AppError::NotFound)` - No such user
    /// - `Err(AppError::IoErr)` - Writing the file failed
    pub async fn save_avatar(
        &self,
        user_id: &str,
        original_file_name: &str,
        bytes: &[u8],
    ) -> Result<Vec<ActionResult>, AppError> {
        if bytes.is_empty() {
            return Err(AppError::BadRequest(EMPTY_IMAGE.to_string()));
        }
        if bytes.len() > MAX_AVATAR_BYTES {
            return Err(AppError::BadRequest(IMAGE_TOO_LARGE.to_string()));
        }
        let Some(extension) = image_extension(original_file_name) else {
            return Err(AppError::BadRequest(UNSUPPORTED_IMAGE.to_string()));
        };

        let user_repo = UserRepository::new(self.db);
        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AppError::NotFound(USER_NOT_FOUND.to_string()));
        };

        let dir = self.upload_dir.join(AVATAR_DIR);
        tokio::fs::create_dir_all(&dir).await?;

        let file_name = format!("{}.{}", Uuid::new_v4(), extension);
        tokio::fs::write(dir.join(&file_name), bytes).await?;

        let updated = user_repo
            .set_avatar_file_name(user_id, Some(file_name))
            .await?;

        if let Some(previous) = user.avatar_file_name {
            if let Err(e) = tokio::fs::remove_file(dir.join(&previous)).await {
                tracing::warn!("Could not remove old avatar {}: {}", previous, e);
            }
        }

        Ok(vec![ActionResult::from_outcome(updated, UPDATE_AVATAR)])
    }
}

/// Lowercased extension of `file_name` when it is an accepted image type.
fn image_extension(file_name: &str) -> Option<String> {
    let extension = Path::new(file_name)
        .extension()?
        .to_str()?
        .to_ascii_lowercase();

    ALLOWED_EXTENSIONS
        .contains(&extension.as_str())
        .then_some(extension)
}
