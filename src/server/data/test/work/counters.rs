use super::*;

/// Tests the view counter increments in place.
///
/// Expected: Ok(true) twice, views = 2; Ok(false) for a missing work
#[tokio::test]
async fn increments_views() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_work_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, work) = factory::helpers::create_work_with_author(db).await?;

    let repo = WorkRepository::new(db);
    assert!(repo.increment_views(work.id).await?);
    assert!(repo.increment_views(work.id).await?);
    assert!(!repo.increment_views(work.id + 1000).await?);

    assert_eq!(repo.find_by_id(work.id).await?.unwrap().views, 2);

    Ok(())
}

/// Tests unlike never drives the like counter below zero.
///
/// Expected: like -> 1, unlike -> 0, unlike again stays 0
#[tokio::test]
async fn likes_never_go_negative() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_work_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, work) = factory::helpers::create_work_with_author(db).await?;

    let repo = WorkRepository::new(db);
    assert_eq!(repo.like(work.id).await?, Some(1));
    assert_eq!(repo.unlike(work.id).await?, Some(0));
    assert_eq!(repo.unlike(work.id).await?, Some(0));
    assert_eq!(repo.like(work.id + 1000).await?, None);

    Ok(())
}
