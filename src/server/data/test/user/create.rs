use super::*;

fn params(email: &str, nick: &str) -> CreateUserParams {
    CreateUserParams {
        id: format!("id-{}", nick),
        email: email.to_string(),
        password_hash: "hash".to_string(),
        nick: nick.to_string(),
        bio: Some("Bajen sen 1891".to_string()),
    }
}

/// Tests an account is created together with its nickname and the invite
/// is consumed.
///
/// Expected: Some(account) with bio; nickname current; invite stamped
#[tokio::test]
async fn creates_account_and_consumes_invite() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_user(db).await?;
    factory::create_invite(db, "ny@example.com", &admin.id).await?;

    let created = UserRepository::new(db)
        .create(params("ny@example.com", "Söderkis"))
        .await?
        .unwrap();

    assert_eq!(created.email, "ny@example.com");
    assert_eq!(created.bio.as_deref(), Some("Bajen sen 1891"));
    assert_eq!(
        NicknameRepository::new(db).current_for_user(&created.id).await?,
        Some("Söderkis".to_string())
    );

    let invite = entity::prelude::Invite::find().one(db).await?.unwrap();
    assert!(invite.account_created);
    assert!(invite.account_created_at.is_some());

    Ok(())
}

/// Tests nothing is written when no unused invite is left for the email.
///
/// Expected: Ok(None); no user row and no nickname row
#[tokio::test]
async fn writes_nothing_without_invite() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let created = repo.create(params("okand@example.com", "Okänd")).await?;

    assert!(created.is_none());
    assert!(repo.find_by_email("okand@example.com").await?.is_none());
    assert!(entity::prelude::Nickname::find().all(db).await?.is_empty());

    Ok(())
}

/// Tests a failed insert leaves the invite unconsumed.
///
/// Expected: Err for the duplicate email; invite still active
#[tokio::test]
async fn failed_insert_keeps_invite() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::user::UserFactory::new(db)
        .email("ny@example.com")
        .build()
        .await?;
    factory::create_invite(db, "ny@example.com", &existing.id).await?;

    let result = UserRepository::new(db)
        .create(params("ny@example.com", "Dubblett"))
        .await;

    assert!(result.is_err());
    assert!(InviteRepository::new(db)
        .active_exists_for_email("ny@example.com")
        .await?);

    Ok(())
}
