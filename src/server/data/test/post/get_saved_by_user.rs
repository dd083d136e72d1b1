use super::*;

/// Tests saved posts come back most recently saved first, and only the
/// saver's own saves.
///
/// Expected: [second, first] for the saver, nothing for another user
#[tokio::test]
async fn returns_saved_posts_for_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let saver = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let first = factory::create_post(db, &author.id).await?;
    let second = factory::create_post(db, &author.id).await?;

    let repo = PostRepository::new(db);
    repo.save_for_user(first.id, &saver.id).await?;
    repo.save_for_user(second.id, &saver.id).await?;

    let saved = repo.get_saved_by_user(&saver.id, 0, 5).await?;
    let ids: Vec<i32> = saved.iter().map(|p| p.id).collect();

    assert_eq!(ids, vec![second.id, first.id]);
    assert_eq!(repo.count_saved_by_user(&saver.id).await?, 2);
    assert!(repo.is_saved_by_user(first.id, &saver.id).await?);
    assert!(!repo.is_saved_by_user(first.id, &other.id).await?);
    assert!(repo.get_saved_by_user(&other.id, 0, 5).await?.is_empty());

    Ok(())
}
