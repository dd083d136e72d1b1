use super::*;
use crate::server::model::post::UpdatePostParams;

/// Tests editing replaces the message, keeps tip clicks and swaps the lineup.
///
/// Expected: new message and `updated` set; same tip row with new href and
/// its clicks; only the new lineup linked
#[tokio::test]
async fn replaces_message_tip_and_lineup() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let post = factory::create_post(db, &user.id).await?;
    let tip = factory::create_url_tip(db, post.id, "https://old.example").await?;
    crate::server::data::url_tip::UrlTipRepository::new(db)
        .increment_clicks(post.id)
        .await?;
    let formation = factory::create_formation(db, "4-4-2").await?;
    let old = factory::create_lineup(db, formation.id, &user.id, &[]).await?;
    let new = factory::create_lineup(db, formation.id, &user.id, &[]).await?;
    factory::connect_lineup(db, post.id, old.id).await?;

    let repo = PostRepository::new(db);
    let updated = repo
        .update(&UpdatePostParams {
            id: post.id,
            message: "Rättat".to_string(),
            url_tip_href: Some("https://new.example".to_string()),
            lineup_id: Some(new.id),
        })
        .await?;

    assert!(updated);
    let stored = repo.get_by_id(post.id).await?.unwrap();
    assert_eq!(stored.message, "Rättat");
    assert!(stored.updated.is_some());

    let tips = entity::prelude::UrlTip::find().all(db).await?;
    assert_eq!(tips.len(), 1);
    assert_eq!(tips[0].id, tip.id);
    assert_eq!(tips[0].href, "https://new.example");
    assert_eq!(tips[0].clicks, 1);

    let links = entity::prelude::PostLineup::find().all(db).await?;
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].lineup_id, new.id);

    Ok(())
}

/// Tests `None` removes the tip and lineup link.
///
/// Expected: no tip and no link rows left
#[tokio::test]
async fn clears_tip_and_lineup() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let post = factory::create_post(db, &user.id).await?;
    factory::create_url_tip(db, post.id, "https://old.example").await?;
    let formation = factory::create_formation(db, "4-4-2").await?;
    let lineup = factory::create_lineup(db, formation.id, &user.id, &[]).await?;
    factory::connect_lineup(db, post.id, lineup.id).await?;

    let updated = PostRepository::new(db)
        .update(&UpdatePostParams {
            id: post.id,
            message: "Utan bilagor".to_string(),
            url_tip_href: None,
            lineup_id: None,
        })
        .await?;

    assert!(updated);
    assert!(entity::prelude::UrlTip::find().all(db).await?.is_empty());
    assert!(entity::prelude::PostLineup::find().all(db).await?.is_empty());

    Ok(())
}

/// Tests editing a missing post.
///
/// Expected: Ok(false); no tip written
#[tokio::test]
async fn unknown_post_writes_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let updated = PostRepository::new(db)
        .update(&UpdatePostParams {
            id: 404,
            message: "Finns inte".to_string(),
            url_tip_href: Some("https://new.example".to_string()),
            lineup_id: None,
        })
        .await?;

    assert!(!updated);
    assert!(entity::prelude::UrlTip::find().all(db).await?.is_empty());

    Ok(())
}
