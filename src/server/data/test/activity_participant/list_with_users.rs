use super::*;

/// Tests participants come back in registration order with user summaries.
///
/// Expected: Ok with both participants, first registrant first, names attached
#[tokio::test]
async fn lists_participants_with_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let activity = factory::create_activity(db).await?;
    let other = factory::create_activity(db).await?;
    let first = factory::user::UserFactory::new(db).name("Lin").build().await?;
    let second = factory::user::UserFactory::new(db).name("Wen").build().await?;
    factory::create_participant(db, activity.id, first.id).await?;
    factory::create_participant(db, activity.id, second.id).await?;
    factory::create_participant(db, other.id, first.id).await?;

    let repo = ActivityParticipantRepository::new(db);
    let participants = repo.list_with_users(activity.id).await?;

    assert_eq!(participants.len(), 2);
    assert_eq!(participants[0].user_id, first.id);
    assert_eq!(participants[0].user.as_ref().unwrap().name, "Lin");
    assert_eq!(participants[1].user.as_ref().unwrap().name, "Wen");

    Ok(())
}
