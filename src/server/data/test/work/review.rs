use super::*;

/// Tests approving records the note and the reviewer.
///
/// Expected: status approved; review_note set; reviewed_by and reviewed_at stamped
#[tokio::test]
async fn approves_with_note() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_work_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, work) = factory::helpers::create_work_with_author(db).await?;
    let reviewer = factory::create_user(db).await?;

    let repo = WorkRepository::new(db);
    let reviewed = repo
        .review(
            work.id,
            reviewer.id,
            WorkReview::Approve {
                note: Some("Lovely imagery".to_string()),
            },
        )
        .await?
        .unwrap();

    assert_eq!(reviewed.status, WorkStatus::Approved);
    assert_eq!(reviewed.review_note.as_deref(), Some("Lovely imagery"));
    assert_eq!(reviewed.reviewed_by, Some(reviewer.id));
    assert!(reviewed.reviewed_at.is_some());
    assert!(reviewed.reject_reason.is_none());

    Ok(())
}

/// Tests rejecting records the reason; missing works yield None.
///
/// Expected: status rejected with reject_reason; Ok(None) for unknown id
#[tokio::test]
async fn rejects_with_reason() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_work_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, work) = factory::helpers::create_work_with_author(db).await?;
    let reviewer = factory::create_user(db).await?;

    let repo = WorkRepository::new(db);
    let reviewed = repo
        .review(
            work.id,
            reviewer.id,
            WorkReview::Reject {
                reason: Some("Off topic".to_string()),
            },
        )
        .await?
        .unwrap();

    assert_eq!(reviewed.status, WorkStatus::Rejected);
    assert_eq!(reviewed.reject_reason.as_deref(), Some("Off topic"));

    let missing = repo
        .review(work.id + 1000, reviewer.id, WorkReview::Approve { note: None })
        .await?;
    assert!(missing.is_none());

    Ok(())
}
