use super::*;

/// Tests an empty message is rejected and nothing is stored.
///
/// Expected: Err(AppError::BadRequest(EMPTY_PM)), no message rows
#[tokio::test]
async fn rejects_empty_message_without_writing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let from = factory::create_user(db).await?;
    let to = factory::create_user(db).await?;

    let result = PersonalMessageService::new(db)
        .create(pm(&from.id, &to.id, " \n "))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(ref msg)) if msg == EMPTY_PM));
    assert_eq!(entity::prelude::PersonalMessage::find().count(db).await?, 0);

    Ok(())
}

/// Tests a stored message shows up for both sides of the conversation.
///
/// Expected: one message, partner listed for each user
#[tokio::test]
async fn stores_trimmed_message() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let from = factory::create_user(db).await?;
    let to = factory::create_user(db).await?;
    let service = PersonalMessageService::new(db);

    service.create(pm(&from.id, &to.id, "  Hej!  ")).await?;

    let conversation = service.get_conversation(&to.id, &from.id).await?;
    assert_eq!(conversation.len(), 1);
    assert_eq!(conversation[0].message, "Hej!");

    let partners = service.get_conversation_partners(&to.id).await?;
    assert_eq!(partners.iter().map(|p| p.id.as_str()).collect::<Vec<_>>(), vec![from.id.as_str()]);

    Ok(())
}

/// Tests writing to a user that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rejects_unknown_recipient() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let from = factory::create_user(db).await?;

    let result = PersonalMessageService::new(db)
        .create(pm(&from.id, "nobody", "Hallå"))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
