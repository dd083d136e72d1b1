use super::*;

/// Tests an avatar is written under a random name and replaces the old one.
///
/// Expected: only the second file remains, user points at it
#[tokio::test]
async fn stores_and_replaces_avatar() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let dir = scratch_dir();
    let service = UploadService::new(db, &dir);

    service.save_avatar(&user.id, "forsta.png", b"png-bytes").await?;
    let first = UserRepository::new(db)
        .find_by_id(&user.id)
        .await?
        .and_then(|u| u.avatar_file_name)
        .unwrap();

    service.save_avatar(&user.id, "andra.JPG", b"jpg-bytes").await?;
    let second = UserRepository::new(db)
        .find_by_id(&user.id)
        .await?
        .and_then(|u| u.avatar_file_name)
        .unwrap();

    assert!(second.ends_with(".jpg"));
    assert!(!dir.join(AVATAR_DIR).join(&first).exists());
    assert_eq!(std::fs::read(dir.join(AVATAR_DIR).join(&second))?, b"jpg-bytes");

    std::fs::remove_dir_all(&dir)?;

    Ok(())
}

/// Tests files that are not acceptable avatars are refused before any write.
///
/// Expected: EMPTY_IMAGE, IMAGE_TOO_LARGE and UNSUPPORTED_IMAGE rejections
#[tokio::test]
async fn rejects_invalid_files() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let dir = scratch_dir();
    let service = UploadService::new(db, &dir);
    let too_large = vec![0u8; MAX_AVATAR_BYTES + 1];

    assert!(matches!(
        service.save_avatar(&user.id, "a.png", b"").await,
        Err(AppError::BadRequest(ref msg)) if msg == EMPTY_IMAGE
    ));
    assert!(matches!(
        service.save_avatar(&user.id, "a.png", &too_large).await,
        Err(AppError::BadRequest(ref msg)) if msg == IMAGE_TOO_LARGE
    ));
    assert!(matches!(
        service.save_avatar(&user.id, "a.exe", b"MZ").await,
        Err(AppError::BadRequest(ref msg)) if msg == UNSUPPORTED_IMAGE
    ));
    assert!(!dir.exists());

    Ok(())
}
