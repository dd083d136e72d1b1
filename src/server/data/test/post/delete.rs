use super::*;
use crate::server::data::vote::VoteRepository;
use crate::server::model::post::CreateVoteParams;
use crate::model::forum::VoteTypeDto;

/// Tests deleting a post removes its votes, tips and markers but keeps replies.
///
/// Expected: Ok(true); child rows gone; the reply survives without a parent
#[tokio::test]
async fn deletes_post_with_children() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let voter = factory::create_user(db).await?;
    let post = factory::create_post(db, &author.id).await?;
    let reply = factory::post::PostFactory::new(db, &voter.id)
        .parent(post.id)
        .build()
        .await?;

    VoteRepository::new(db)
        .create(CreateVoteParams::new(
            VoteTypeDto::Up,
            post.id,
            voter.id.clone(),
        ))
        .await?;
    factory::create_url_tip(db, post.id, "https://example.com").await?;

    let repo = PostRepository::new(db);
    repo.save_for_user(post.id, &voter.id).await?;

    let deleted = repo.delete(post.id).await?;

    assert!(deleted);
    assert!(repo.get_by_id(post.id).await?.is_none());
    assert!(entity::prelude::Vote::find().all(db).await?.is_empty());
    assert!(entity::prelude::UrlTip::find().all(db).await?.is_empty());
    assert!(entity::prelude::SavedPost::find().all(db).await?.is_empty());

    let reply = repo.get_by_id(reply.id).await?.unwrap();
    assert_eq!(reply.parent_post_id, None);

    Ok(())
}

/// Tests deleting a missing post reports nothing deleted.
///
/// Expected: Ok(false)
#[tokio::test]
async fn missing_post_returns_false() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = PostRepository::new(db).delete(404).await?;

    assert!(!deleted);

    Ok(())
}
