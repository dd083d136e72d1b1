use super::*;

/// Tests an unconsumed invite counts as active.
///
/// Expected: Ok(true) for the invited email, Ok(false) for another
#[tokio::test]
async fn finds_unconsumed_invite() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_user(db).await?;
    factory::create_invite(db, "ny@example.com", &admin.id).await?;

    let repo = InviteRepository::new(db);

    assert!(repo.active_exists_for_email("ny@example.com").await?);
    assert!(!repo.active_exists_for_email("annan@example.com").await?);

    Ok(())
}

/// Tests a consumed invite no longer counts as active.
///
/// Expected: Ok(false) after the account was created
#[tokio::test]
async fn consumed_invite_is_not_active() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_user(db).await?;
    factory::create_invite(db, "ny@example.com", &admin.id).await?;

    UserRepository::new(db)
        .create(CreateUserParams {
            id: "ny".to_string(),
            email: "ny@example.com".to_string(),
            password_hash: "hash".to_string(),
            nick: "Ny".to_string(),
            bio: None,
        })
        .await?;

    assert!(!InviteRepository::new(db)
        .active_exists_for_email("ny@example.com")
        .await?);

    Ok(())
}
