use super::*;

/// Tests listing the activities a user registered for.
///
/// Verifies that only joined, non-deleted activities are returned, latest
/// date first.
///
/// Expected: Ok with two activities in descending date order
#[tokio::test]
async fn lists_registered_activities() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let early = factory::activity::ActivityFactory::new(db)
        .date(NaiveDate::from_ymd_opt(2026, 2, 1).unwrap())
        .build()
        .await?;
    let late = factory::activity::ActivityFactory::new(db)
        .date(NaiveDate::from_ymd_opt(2026, 8, 1).unwrap())
        .build()
        .await?;
    let deleted = factory::activity::ActivityFactory::new(db)
        .deleted()
        .build()
        .await?;
    factory::create_activity(db).await?;

    factory::create_participant(db, early.id, user.id).await?;
    factory::create_participant(db, late.id, user.id).await?;
    factory::create_participant(db, deleted.id, user.id).await?;

    let repo = ActivityRepository::new(db);
    let (activities, total) = repo
        .get_paginated_for_user(user.id, PageParams::default())
        .await?;

    assert_eq!(total, 2);
    assert_eq!(activities[0].id, late.id);
    assert_eq!(activities[1].id, early.id);
    assert_eq!(activities[0].current_participants, 1);

    Ok(())
}
