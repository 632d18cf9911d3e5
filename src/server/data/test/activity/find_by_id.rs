use super::*;

/// Tests finding an activity includes its derived participant count.
///
/// Verifies that the repository counts participant rows instead of reading a
/// stored counter.
///
/// Expected: Ok(Some) with current_participants equal to registrations
#[tokio::test]
async fn finds_activity_with_participant_count() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let activity = factory::create_activity(db).await?;
    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;
    factory::create_participant(db, activity.id, first.id).await?;
    factory::create_participant(db, activity.id, second.id).await?;

    let repo = ActivityRepository::new(db);
    let result = repo.find_by_id(activity.id).await?;

    assert!(result.is_some());
    let found = result.unwrap();
    assert_eq!(found.title, activity.title);
    assert_eq!(found.current_participants, 2);

    Ok(())
}

/// Tests soft-deleted activities are invisible.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_deleted_activity() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let activity = factory::activity::ActivityFactory::new(db)
        .deleted()
        .build()
        .await?;

    let repo = ActivityRepository::new(db);

    assert!(repo.find_by_id(activity.id).await?.is_none());
    assert!(repo.find_by_id(activity.id + 1000).await?.is_none());

    Ok(())
}
