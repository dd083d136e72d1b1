use super::*;

/// Tests a user votes once per poll.
///
/// Expected: first vote counted, second answers ALREADY_VOTED_POLL
#[tokio::test]
async fn counts_one_vote_per_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let voter = factory::create_user(db).await?;
    let service = PollService::new(db);
    service
        .create("Vem vinner derbyt", alternatives(&["Bajen", "Gnaget"]), &creator.id)
        .await?;
    let poll = service.get_all(&voter.id).await?.remove(0);
    let alternative_id = poll.alternatives[0].id;

    let first = service.vote(&poll.slug, alternative_id, &voter.id).await?;
    let second = service.vote(&poll.slug, alternative_id, &voter.id).await?;

    assert!(first[0].success);
    assert!(!second[0].success);
    assert_eq!(second[0].message, ALREADY_VOTED_POLL);

    let seen = service.get_by_slug(&voter.id, &poll.slug).await?;
    assert!(seen.logged_in_user_has_voted);
    assert_eq!(seen.alternatives[0].votes, 1);

    Ok(())
}

/// Tests voting for an alternative that belongs to another poll.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_foreign_alternative() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let service = PollService::new(db);
    service
        .create("Första", alternatives(&["A", "B"]), &user.id)
        .await?;
    service
        .create("Andra", alternatives(&["C", "D"]), &user.id)
        .await?;

    let polls = service.get_all(&user.id).await?;
    let (target, other) = (&polls[0], &polls[1]);

    let result = service
        .vote(&target.slug, other.alternatives[0].id, &user.id)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests voting in a poll that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_unknown_poll() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = PollService::new(db).vote("finns-inte", 1, &user.id).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
