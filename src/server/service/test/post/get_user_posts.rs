use super::*;

/// Tests profile listings page five posts at a time.
///
/// Expected: pages of 5 and 2 posts, an empty third page, 2 pages in total
#[tokio::test]
async fn pages_five_posts_at_a_time() -> Result<(), AppError> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    for _ in 0..7 {
        factory::create_post(db, &user.id).await?;
    }

    let service = PostService::new(db);
    let first = service.get_user_posts(None, &user.id, 1).await?;
    let second = service.get_user_posts(None, &user.id, 2).await?;
    let third = service.get_user_posts(None, &user.id, 3).await?;

    assert_eq!(first.posts.len(), 5);
    assert_eq!(second.posts.len(), 2);
    assert!(third.posts.is_empty());
    assert_eq!(first.number_of_pages, 2);
    assert_eq!(third.total, 7);

    Ok(())
}

/// Tests page zero is treated as out of range.
///
/// Expected: no posts
#[tokio::test]
async fn page_zero_is_empty() -> Result<(), AppError> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_post(db, &user.id).await?;

    let page = PostService::new(db).get_user_posts(None, &user.id, 0).await?;

    assert!(page.posts.is_empty());
    assert_eq!(page.number_of_pages, 1);

    Ok(())
}
