use super::*;

/// Tests invites are listed newest first with the inviter's nickname.
///
/// Expected: [second, first], both sent by "Kansliet"
#[tokio::test]
async fn lists_invites_with_inviter() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_user_with_nick(db, "Kansliet").await?;
    let repo = InviteRepository::new(db);
    repo.create("forsta@example.com", &admin.id).await?;
    repo.create("andra@example.com", &admin.id).await?;

    let invites = repo.get_all().await?;

    let emails: Vec<&str> = invites.iter().map(|i| i.email.as_str()).collect();
    assert_eq!(emails, vec!["andra@example.com", "forsta@example.com"]);
    assert!(invites
        .iter()
        .all(|i| i.invited_by.nick.as_deref() == Some("Kansliet")));
    assert!(invites.iter().all(|i| !i.account_created));

    Ok(())
}
