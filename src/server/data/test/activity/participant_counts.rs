use super::*;

/// Tests grouped participant counts for a set of activities.
///
/// Expected: Ok with counts only for activities that have registrations
#[tokio::test]
async fn counts_participants_per_activity() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let busy = factory::create_activity(db).await?;
    let quiet = factory::create_activity(db).await?;
    for _ in 0..3 {
        let user = factory::create_user(db).await?;
        factory::create_participant(db, busy.id, user.id).await?;
    }

    let repo = ActivityRepository::new(db);
    let counts = repo.participant_counts(&[busy.id, quiet.id]).await?;

    assert_eq!(counts.get(&busy.id), Some(&3));
    assert_eq!(counts.get(&quiet.id), None);
    assert!(repo.participant_counts(&[]).await?.is_empty());

    Ok(())
}
