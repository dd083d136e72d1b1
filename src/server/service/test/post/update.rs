use super::*;

/// Tests a user cannot edit a post written by someone else.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_other_users() -> Result<(), AppError> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let post = factory::create_post(db, &author.id).await?;

    let editor = LoggedInUser {
        user: other,
        roles: Vec::new(),
    };
    let result = PostService::new(db)
        .update(
            &editor,
            UpdatePostParams {
                id: post.id,
                message: "Ändrat".to_string(),
                url_tip_href: None,
                lineup_id: None,
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests an Admin may edit any post and that leaving the tip out removes it.
///
/// Expected: message replaced, tip gone
#[tokio::test]
async fn admin_edit_removes_tip() -> Result<(), AppError> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let admin = factory::create_user(db).await?;

    let service = PostService::new(db);
    let mut params = new_post(&author.id, "Original");
    params.url_tip_href = Some("https://bajen.se".to_string());
    service.create(params).await?;
    let post_id = service.get_user_posts(None, &author.id, 1).await?.posts[0].id;

    let editor = LoggedInUser {
        user: admin,
        roles: vec!["Admin".to_string()],
    };
    service
        .update(
            &editor,
            UpdatePostParams {
                id: post_id,
                message: "Modererat".to_string(),
                url_tip_href: None,
                lineup_id: None,
            },
        )
        .await?;

    let post = service.get_post(None, post_id).await?;
    assert_eq!(post.message, "Modererat");
    assert_eq!(post.url_tip_href, None);
    assert!(post.updated.is_some());

    Ok(())
}
