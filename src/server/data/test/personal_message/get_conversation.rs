use super::*;

/// Tests a conversation holds both directions, newest first, and nothing
/// from third parties.
///
/// Expected: ["svar", "hej"]
#[tokio::test]
async fn returns_both_directions_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::create_user(db).await?;
    let b = factory::create_user(db).await?;
    let c = factory::create_user(db).await?;

    let repo = PersonalMessageRepository::new(db);
    repo.create(pm(&a.id, &b.id, "hej")).await?;
    repo.create(pm(&b.id, &a.id, "svar")).await?;
    repo.create(pm(&c.id, &a.id, "annat")).await?;

    let conversation = repo.get_conversation(&a.id, &b.id).await?;
    let messages: Vec<&str> = conversation.iter().map(|m| m.message.as_str()).collect();

    assert_eq!(messages, vec!["svar", "hej"]);
    assert_eq!(conversation[0].from.id, b.id);
    assert_eq!(conversation[0].to.id, a.id);

    Ok(())
}

/// Tests partners are listed once each, latest conversation first.
///
/// Expected: [c, b]
#[tokio::test]
async fn lists_each_partner_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::create_user(db).await?;
    let b = factory::create_user(db).await?;
    let c = factory::create_user(db).await?;

    let repo = PersonalMessageRepository::new(db);
    repo.create(pm(&a.id, &b.id, "1")).await?;
    repo.create(pm(&b.id, &a.id, "2")).await?;
    repo.create(pm(&c.id, &a.id, "3")).await?;

    let partners = repo.get_conversation_partners(&a.id).await?;
    let ids: Vec<&str> = partners.iter().map(|p| p.id.as_str()).collect();

    assert_eq!(ids, vec![c.id.as_str(), b.id.as_str()]);

    Ok(())
}
