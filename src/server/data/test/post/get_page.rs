use super::*;

/// Tests scissored posts are left out of listings and counts.
///
/// Expected: only the unscissored post is returned and counted
#[tokio::test]
async fn excludes_scissored_posts() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let kept = factory::create_post(db, &user.id).await?;
    let hidden = factory::create_post(db, &user.id).await?;

    let repo = PostRepository::new(db);
    repo.scissor(hidden.id, &user.id).await?;

    let filter = Filter::default();
    let page = repo.get_page(&filter, 0, 10).await?;

    assert_eq!(page.len(), 1);
    assert_eq!(page[0].id, kept.id);
    assert_eq!(repo.count_filtered(&filter).await?, 1);

    Ok(())
}

/// Tests listings stay within SQLite's bound variable limit when more posts
/// are scissored than a single statement can bind.
///
/// Expected: the one unscissored post is listed and counted
#[tokio::test]
async fn excludes_more_scissored_posts_than_bind_limit() -> Result<(), DbErr> {
    const HIDDEN: i32 = 33_000;
    const BATCH: i32 = 1_000;

    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let now = Utc::now();

    for start in (1..=HIDDEN).step_by(BATCH as usize) {
        let ids = start..(start + BATCH).min(HIDDEN + 1);
        entity::prelude::Post::insert_many(ids.clone().map(|id| entity::post::ActiveModel {
            id: ActiveValue::Set(id),
            message: ActiveValue::Set(format!("dold {}", id)),
            created_by_user_id: ActiveValue::Set(user.id.clone()),
            parent_post_id: ActiveValue::Set(None),
            created: ActiveValue::Set(now),
            updated: ActiveValue::Set(None),
        }))
        .exec(db)
        .await?;
        entity::prelude::ScissoredPost::insert_many(ids.map(|id| {
            entity::scissored_post::ActiveModel {
                post_id: ActiveValue::Set(id),
                scissored_by_user_id: ActiveValue::Set(user.id.clone()),
                created: ActiveValue::Set(now),
                ..Default::default()
            }
        }))
        .exec(db)
        .await?;
    }
    let kept = factory::create_post(db, &user.id).await?;

    let repo = PostRepository::new(db);
    let filter = Filter::default();

    let page = repo.get_page(&filter, 0, 10).await?;
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].id, kept.id);
    assert_eq!(repo.count_filtered(&filter).await?, 1);
    assert_eq!(repo.count_by_user(&user.id).await?, 1);

    Ok(())
}

/// Tests posts are ordered newest first and offset/limit select the window.
///
/// Expected: second page of size 2 holds the third and fourth newest posts
#[tokio::test]
async fn pages_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let base = Utc::now() - Duration::hours(10);
    let mut ids = Vec::new();
    for i in 0..5 {
        let post = factory::post::PostFactory::new(db, &user.id)
            .created(base + Duration::minutes(i))
            .build()
            .await?;
        ids.push(post.id);
    }

    let page = PostRepository::new(db)
        .get_page(&Filter::default(), 2, 2)
        .await?;

    let page_ids: Vec<i32> = page.iter().map(|p| p.id).collect();
    assert_eq!(page_ids, vec![ids[2], ids[1]]);

    Ok(())
}

/// Tests excluded and included users narrow the listing.
///
/// Expected: excluding A leaves B and C; including only C leaves C
#[tokio::test]
async fn filters_on_users() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::create_user(db).await?;
    let b = factory::create_user(db).await?;
    let c = factory::create_user(db).await?;
    factory::create_post(db, &a.id).await?;
    factory::create_post(db, &b.id).await?;
    factory::create_post(db, &c.id).await?;

    let repo = PostRepository::new(db);

    let excluding = Filter {
        excluded_users: vec![key(&a)],
        ..Default::default()
    };
    let posts = repo.get_page(&excluding, 0, 10).await?;
    assert_eq!(posts.len(), 2);
    assert!(posts.iter().all(|p| p.created_by_user_id != a.id));

    let including = Filter {
        included_users: vec![key(&c)],
        ..Default::default()
    };
    let posts = repo.get_page(&including, 0, 10).await?;
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].created_by_user_id, c.id);

    Ok(())
}

/// Tests the date range is inclusive on both ends by calendar day.
///
/// Expected: posts on the 10th and 12th match 10..=12, the 13th does not
#[tokio::test]
async fn filters_on_date_range() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    for (day, hour) in [(9, 23), (10, 0), (12, 23), (13, 0)] {
        factory::post::PostFactory::new(db, &user.id)
            .created(Utc.with_ymd_and_hms(2024, 5, day, hour, 30, 0).unwrap())
            .build()
            .await?;
    }

    let filter = Filter {
        from_date: NaiveDate::from_ymd_opt(2024, 5, 10),
        to_date: NaiveDate::from_ymd_opt(2024, 5, 12),
        ..Default::default()
    };

    let repo = PostRepository::new(db);
    assert_eq!(repo.count_filtered(&filter).await?, 2);

    Ok(())
}

/// Tests the starting eleven switch selects posts with or without a lineup.
///
/// Expected: With -> the linked post only, Without -> the other post only
#[tokio::test]
async fn filters_on_lineup_presence() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let with_lineup = factory::create_post(db, &user.id).await?;
    let without_lineup = factory::create_post(db, &user.id).await?;
    let formation = factory::create_formation(db, "4-4-2").await?;
    let lineup = factory::create_lineup(db, formation.id, &user.id, &[]).await?;

    factory::connect_lineup(db, with_lineup.id, lineup.id).await?;

    let repo = PostRepository::new(db);

    let with = Filter {
        starting_eleven: StartingEleven::With,
        ..Default::default()
    };
    let posts = repo.get_page(&with, 0, 10).await?;
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].id, with_lineup.id);

    let without = Filter {
        starting_eleven: StartingEleven::Without,
        ..Default::default()
    };
    let posts = repo.get_page(&without, 0, 10).await?;
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].id, without_lineup.id);

    Ok(())
}
