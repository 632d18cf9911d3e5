use super::*;

/// Tests soft-deleted comments disappear from lookups and likes.
///
/// Expected: Ok(true) then Ok(false); find and like return None afterwards
#[tokio::test]
async fn hides_deleted_comment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_work_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, work) = factory::helpers::create_work_with_author(db).await?;
    let comment = factory::create_comment(db, author.id, work.id).await?;

    let repo = CommentRepository::new(db);
    assert_eq!(repo.like(comment.id).await?, Some(1));

    assert!(repo.soft_delete(comment.id).await?);
    assert!(!repo.soft_delete(comment.id).await?);

    assert!(repo.find_by_id(comment.id).await?.is_none());
    assert_eq!(repo.like(comment.id).await?, None);

    Ok(())
}
