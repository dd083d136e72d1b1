use super::*;

/// Tests roles are replaced and unknown names are skipped.
///
/// Expected: only "Author" applied and stored
#[tokio::test]
async fn replaces_memberships() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let admin = factory::create_role(db, "Admin").await?;
    factory::create_role(db, "Author").await?;
    factory::assign_role(db, &user.id, admin.id).await?;

    let repo = RoleRepository::new(db);
    let applied = repo
        .set_for_user(&user.id, &["Author".to_string(), "Ghost".to_string()])
        .await?;

    assert_eq!(applied, vec!["Author".to_string()]);
    assert_eq!(repo.get_for_user(&user.id).await?, vec!["Author".to_string()]);

    Ok(())
}

/// Tests listing the members of a role.
///
/// Expected: only the assigned user
#[tokio::test]
async fn lists_users_in_role() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let manager = factory::create_user(db).await?;
    factory::create_user(db).await?;
    let role = factory::create_role(db, "Manager").await?;
    factory::assign_role(db, &manager.id, role.id).await?;

    let repo = RoleRepository::new(db);
    let users = repo.get_users_in_role("Manager").await?;

    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id, manager.id);
    assert!(repo.get_users_in_role("Nobody").await?.is_empty());

    Ok(())
}
