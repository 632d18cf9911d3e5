use super::*;

/// Tests review sets the status and records the reviewer.
///
/// Expected: Ok(Some) with status hidden and reviewed_by set
#[tokio::test]
async fn records_review_decision() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_work_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, work) = factory::helpers::create_work_with_author(db).await?;
    let comment = factory::create_comment(db, author.id, work.id).await?;
    let reviewer = factory::create_user(db).await?;

    let repo = CommentRepository::new(db);
    let reviewed = repo
        .review(comment.id, reviewer.id, CommentStatus::Hidden)
        .await?
        .unwrap();

    assert_eq!(reviewed.status, CommentStatus::Hidden);
    assert_eq!(reviewed.reviewed_by, Some(reviewer.id));
    assert!(reviewed.reviewed_at.is_some());

    Ok(())
}
