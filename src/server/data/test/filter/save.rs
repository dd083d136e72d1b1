use super::*;

/// Tests a stored filter comes back with current nicknames for its users.
///
/// Expected: update reports false before a filter exists, then true; nick
/// of the excluded user resolved
#[tokio::test]
async fn stores_and_resolves_filter() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let excluded = factory::create_user_with_nick(db, "Gnaget").await?;
    let filter = Filter {
        posts_per_page: 25,
        excluded_users: vec![UserKey {
            id: excluded.id.clone(),
            nick: String::new(),
        }],
        ..Default::default()
    };

    let repo = FilterRepository::new(db);
    assert!(repo.get_by_user(&owner.id).await?.is_none());
    assert!(!repo.update(&owner.id, &filter).await?);

    repo.create(&owner.id, &filter).await?;
    let stored = repo.get_by_user(&owner.id).await?.unwrap();
    assert_eq!(stored.posts_per_page, 25);
    assert_eq!(stored.excluded_users[0].nick, "Gnaget");

    let smaller = Filter {
        posts_per_page: 5,
        ..filter
    };
    assert!(repo.update(&owner.id, &smaller).await?);
    assert_eq!(repo.get_by_user(&owner.id).await?.unwrap().posts_per_page, 5);

    Ok(())
}

/// Tests a page size that does not fit the column is refused instead of
/// being truncated.
///
/// Expected: Err on create and update; the stored page size is unchanged
#[tokio::test]
async fn refuses_page_size_beyond_column() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let oversized = Filter {
        posts_per_page: 4_294_967_306,
        ..Default::default()
    };

    let repo = FilterRepository::new(db);
    assert!(repo.create(&other.id, &oversized).await.is_err());
    assert!(repo.get_by_user(&other.id).await?.is_none());

    repo.create(&owner.id, &Filter::default()).await?;
    assert!(repo.update(&owner.id, &oversized).await.is_err());
    assert_eq!(repo.get_by_user(&owner.id).await?.unwrap().posts_per_page, 10);

    Ok(())
}
