use super::*;

/// Tests listing approved comments for one work, newest first.
///
/// Verifies that other works, other statuses and soft-deleted comments are
/// excluded and that the author summary is attached.
///
/// Expected: Ok with the two approved comments, latest first
#[tokio::test]
async fn lists_approved_comments_for_work() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_work_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, work) = factory::helpers::create_work_with_author(db).await?;
    let (_, other_work) = factory::helpers::create_work_with_author(db).await?;

    let older = factory::comment::CommentFactory::new(db, author.id, work.id)
        .status(CommentStatus::Approved)
        .build()
        .await?;
    let newer = factory::comment::CommentFactory::new(db, author.id, work.id)
        .status(CommentStatus::Approved)
        .build()
        .await?;
    factory::comment::CommentFactory::new(db, author.id, work.id)
        .build()
        .await?;
    factory::comment::CommentFactory::new(db, author.id, work.id)
        .status(CommentStatus::Approved)
        .deleted()
        .build()
        .await?;
    factory::comment::CommentFactory::new(db, author.id, other_work.id)
        .status(CommentStatus::Approved)
        .build()
        .await?;

    let repo = CommentRepository::new(db);
    let (comments, total) = repo
        .get_paginated(&CommentListParam {
            work_id: Some(work.id),
            status: Some(CommentStatus::Approved),
            sort_dir: SortDir::Desc,
            ..Default::default()
        })
        .await?;

    assert_eq!(total, 2);
    assert_eq!(comments[0].id, newer.id);
    assert_eq!(comments[1].id, older.id);
    assert_eq!(comments[0].author.as_ref().unwrap().id, author.id);

    Ok(())
}
