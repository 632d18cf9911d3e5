use super::*;

/// Tests registering a user for an activity.
///
/// Expected: Ok with status registered and the row findable by pair
#[tokio::test]
async fn creates_registration() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let activity = factory::create_activity(db).await?;
    let user = factory::create_user(db).await?;

    let repo = ActivityParticipantRepository::new(db);
    let participant = repo.create(activity.id, user.id).await?;

    assert_eq!(participant.status, ParticipantStatus::Registered);
    assert_eq!(participant.activity_id, activity.id);
    assert!(repo.find(activity.id, user.id).await?.is_some());
    assert!(repo.find(activity.id, user.id + 1).await?.is_none());

    Ok(())
}

/// Tests the unique (activity, user) index rejects a second row.
///
/// Expected: Err recognized as a unique violation
#[tokio::test]
async fn rejects_duplicate_registration() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let activity = factory::create_activity(db).await?;
    let user = factory::create_user(db).await?;

    let repo = ActivityParticipantRepository::new(db);
    repo.create(activity.id, user.id).await?;
    let result = repo.create(activity.id, user.id).await;

    assert!(result.is_err());
    assert!(is_unique_violation(&result.unwrap_err()));

    Ok(())
}
