use super::*;

/// Tests that the newest nickname wins per user.
///
/// Expected: each user maps to the nickname created last
#[tokio::test]
async fn returns_newest_nick_per_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_user_with_nick(db, "Gammal").await?;
    let second = factory::create_user_with_nick(db, "Bajen").await?;
    add_nick_at(db, &first.id, "Ny", 10).await?;

    let repo = NicknameRepository::new(db);
    let nicks = repo
        .current_for_users(&[first.id.clone(), second.id.clone()])
        .await?;

    assert_eq!(nicks.get(&first.id).map(String::as_str), Some("Ny"));
    assert_eq!(nicks.get(&second.id).map(String::as_str), Some("Bajen"));

    Ok(())
}

/// Tests the single user lookup agrees with the batch lookup and that the
/// history is newest first.
///
/// Expected: current nick "Ny", history ["Ny", "Gammal"]
#[tokio::test]
async fn single_user_lookup_and_history() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user_with_nick(db, "Gammal").await?;
    add_nick_at(db, &user.id, "Ny", 10).await?;

    let repo = NicknameRepository::new(db);

    assert_eq!(repo.current_for_user(&user.id).await?.as_deref(), Some("Ny"));
    assert_eq!(repo.get_for_user(&user.id).await?, vec!["Ny", "Gammal"]);

    Ok(())
}

/// Tests an empty id list short-circuits.
///
/// Expected: empty map
#[tokio::test]
async fn empty_input_returns_empty_map() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let nicks = NicknameRepository::new(db).current_for_users(&[]).await?;

    assert!(nicks.is_empty());

    Ok(())
}
