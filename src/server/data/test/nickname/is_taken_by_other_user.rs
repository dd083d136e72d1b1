use super::*;

/// Tests a nickname currently used by someone else is taken.
///
/// Expected: Ok(true)
#[tokio::test]
async fn current_nick_of_other_user_is_taken() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user_with_nick(db, "Gnaget").await?;
    let me = factory::create_user(db).await?;

    let taken = NicknameRepository::new(db)
        .is_taken_by_other_user("Gnaget", &me.id)
        .await?;

    assert!(taken);

    Ok(())
}

/// Tests a nickname the other user has since replaced is free again.
///
/// Expected: Ok(false)
#[tokio::test]
async fn replaced_nick_is_free() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let other = factory::create_user_with_nick(db, "Gnaget").await?;
    add_nick_at(db, &other.id, "Bajen", 10).await?;
    let me = factory::create_user(db).await?;

    let taken = NicknameRepository::new(db)
        .is_taken_by_other_user("Gnaget", &me.id)
        .await?;

    assert!(!taken);

    Ok(())
}

/// Tests the caller's own current nickname does not count as taken.
///
/// Expected: Ok(false)
#[tokio::test]
async fn own_nick_is_not_taken() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let me = factory::create_user_with_nick(db, "Gnaget").await?;

    let taken = NicknameRepository::new(db)
        .is_taken_by_other_user("Gnaget", &me.id)
        .await?;

    assert!(!taken);

    Ok(())
}
