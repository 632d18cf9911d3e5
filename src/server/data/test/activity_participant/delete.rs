use super::*;

/// Tests removing a registration reports whether a row existed.
///
/// Expected: Ok(true) for the registered pair, Ok(false) afterwards
#[tokio::test]
async fn deletes_registration_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let activity = factory::create_activity(db).await?;
    let user = factory::create_user(db).await?;
    factory::create_participant(db, activity.id, user.id).await?;

    let repo = ActivityParticipantRepository::new(db);

    assert!(repo.delete(activity.id, user.id).await?);
    assert!(!repo.delete(activity.id, user.id).await?);

    Ok(())
}
