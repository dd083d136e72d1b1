use super::*;

/// Tests a click is counted on the post's tip.
///
/// Expected: clicks goes from 0 to 2
#[tokio::test]
async fn counts_clicks_on_tip() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let post = factory::create_post(db, &user.id).await?;

    factory::create_url_tip(db, post.id, "https://www.svenskafans.com").await?;
    let repo = UrlTipRepository::new(db);

    assert!(repo.increment_clicks(post.id).await?);
    assert!(repo.increment_clicks(post.id).await?);

    let tip = repo.get_by_post(post.id).await?.unwrap();
    assert_eq!(tip.clicks, 2);

    Ok(())
}

/// Tests clicking a post without a tip.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_without_tip() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let post = factory::create_post(db, &user.id).await?;

    let result = UrlTipRepository::new(db).increment_clicks(post.id).await?;

    assert!(!result);

    Ok(())
}

/// Tests the tip list is ordered by clicks.
///
/// Expected: the clicked tip first
#[tokio::test]
async fn get_all_orders_by_clicks() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let quiet = factory::create_post(db, &user.id).await?;
    let popular = factory::create_post(db, &user.id).await?;

    factory::create_url_tip(db, quiet.id, "https://a.example").await?;
    factory::create_url_tip(db, popular.id, "https://b.example").await?;
    let repo = UrlTipRepository::new(db);
    repo.increment_clicks(popular.id).await?;

    let tips = repo.get_all().await?;

    assert_eq!(tips[0].post_id, popular.id);
    assert_eq!(tips[1].post_id, quiet.id);

    Ok(())
}
