use super::*;
use crate::model::forum::VoteTypeDto;
use crate::server::data::vote::VoteRepository;
use crate::server::model::post::{CreateVoteParams, PostRecord};

/// Tests authors, voter nicknames, current tip and lineup are attached.
///
/// Expected: author nick resolved, vote carries voter nick, newest tip and
/// newest lineup link win
#[tokio::test]
async fn attaches_related_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user_with_nick(db, "Skribent").await?;
    let voter = factory::create_user_with_nick(db, "Röstare").await?;
    let post = factory::create_post(db, &author.id).await?;

    VoteRepository::new(db)
        .create(CreateVoteParams::new(
            VoteTypeDto::Down,
            post.id,
            voter.id.clone(),
        ))
        .await?;

    factory::create_url_tip(db, post.id, "https://first.example").await?;
    factory::create_url_tip(db, post.id, "https://second.example").await?;

    let formation = factory::create_formation(db, "4-4-2").await?;
    let old = factory::create_lineup(db, formation.id, &author.id, &[]).await?;
    let new = factory::create_lineup(db, formation.id, &author.id, &[]).await?;
    factory::connect_lineup(db, post.id, old.id).await?;
    factory::connect_lineup(db, post.id, new.id).await?;

    let repo = PostRepository::new(db);
    let loaded = repo
        .with_relations(vec![PostRecord::from_entity(post)])
        .await?;

    assert_eq!(loaded.len(), 1);
    let loaded = &loaded[0];
    assert_eq!(
        loaded.author.as_ref().and_then(|a| a.nick.as_deref()),
        Some("Skribent")
    );
    assert_eq!(loaded.votes.len(), 1);
    assert_eq!(loaded.votes[0].by_nick.as_deref(), Some("Röstare"));
    assert_eq!(
        loaded.url_tip.as_ref().map(|t| t.href.as_str()),
        Some("https://second.example")
    );
    assert_eq!(loaded.lineup_id, Some(new.id));
    assert!(!loaded.is_scissored);

    Ok(())
}

/// Tests the whole reply chain is loaded, not just the direct parent.
///
/// Expected: reply -> middle -> root
#[tokio::test]
async fn loads_full_parent_chain() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let root = factory::create_post(db, &user.id).await?;
    let middle = factory::post::PostFactory::new(db, &user.id)
        .parent(root.id)
        .build()
        .await?;
    let reply = factory::post::PostFactory::new(db, &user.id)
        .parent(middle.id)
        .build()
        .await?;

    let loaded = PostRepository::new(db)
        .with_relations(vec![PostRecord::from_entity(reply)])
        .await?;

    let parent = loaded[0].parent.as_ref().unwrap();
    assert_eq!(parent.post.id, middle.id);
    let grandparent = parent.parent.as_ref().unwrap();
    assert_eq!(grandparent.post.id, root.id);
    assert!(grandparent.parent.is_none());

    Ok(())
}
