use super::*;
use crate::server::model::post::CreatePostParams;

fn params(user_id: &str, href: Option<&str>, lineup_id: Option<i32>) -> CreatePostParams {
    CreatePostParams {
        message: "Vilken match!".to_string(),
        created_by_user_id: user_id.to_string(),
        parent_post_id: None,
        url_tip_href: href.map(str::to_string),
        lineup_id,
    }
}

/// Tests a post is stored with its tip and lineup link.
///
/// Expected: one post, one tip with zero clicks, one link to the lineup
#[tokio::test]
async fn stores_tip_and_lineup_with_post() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let formation = factory::create_formation(db, "4-3-3").await?;
    let lineup = factory::create_lineup(db, formation.id, &user.id, &[]).await?;

    let post = PostRepository::new(db)
        .create(&params(&user.id, Some("https://www.svenskafans.com"), Some(lineup.id)))
        .await?;

    let tips = entity::prelude::UrlTip::find().all(db).await?;
    assert_eq!(tips.len(), 1);
    assert_eq!(tips[0].post_id, post.id);
    assert_eq!(tips[0].clicks, 0);

    let links = entity::prelude::PostLineup::find().all(db).await?;
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].lineup_id, lineup.id);

    Ok(())
}

/// Tests a failing tip insert rolls the post back.
///
/// Expected: Err(DbErr); no post row left
#[tokio::test]
async fn failed_tip_rolls_back_post() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_table(entity::prelude::Post)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = PostRepository::new(db)
        .create(&params(&user.id, Some("https://www.svenskafans.com"), None))
        .await;

    assert!(result.is_err());
    assert!(entity::prelude::Post::find().all(db).await?.is_empty());

    Ok(())
}
