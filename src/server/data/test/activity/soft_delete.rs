use super::*;

/// Tests soft delete stamps deleted_at once.
///
/// Verifies that a second delete of the same activity reports nothing deleted
/// and that the row survives in the table.
///
/// Expected: Ok(true) then Ok(false); row still present with deleted_at set
#[tokio::test]
async fn soft_deletes_activity_once() -> Result<(), DbErr> {
    use sea_orm::EntityTrait;

    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let activity = factory::create_activity(db).await?;

    let repo = ActivityRepository::new(db);
    assert!(repo.soft_delete(activity.id).await?);
    assert!(!repo.soft_delete(activity.id).await?);

    let row = entity::prelude::Activity::find_by_id(activity.id)
        .one(db)
        .await?
        .unwrap();
    assert!(row.deleted_at.is_some());

    Ok(())
}
