use std::path::PathBuf;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::result::{EMPTY_IMAGE, IMAGE_TOO_LARGE, UNSUPPORTED_IMAGE},
    service::upload::{UploadService, AVATAR_DIR, MAX_AVATAR_BYTES},
};
use test_utils::{builder::TestBuilder, factory};

mod save_avatar;

fn scratch_dir() -> PathBuf {
    std::env::temp_dir().join(format!("diffen-upload-{}", uuid::Uuid::new_v4()))
}
