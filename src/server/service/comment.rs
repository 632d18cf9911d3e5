//! Comment posting, moderation and likes.

use entity::sea_orm_active_enums::CommentStatus;
use sea_orm::DatabaseConnection;

use crate::{
    model::comment::CommentReviewAction,
    server::{
        data::{comment::CommentRepository, work::WorkRepository},
        error::{auth::AuthError, AppError},
        middleware::auth::{AuthUser, Permission},
        model::comment::{review_target, Comment, CommentListParam},
        service::work::work_not_found,
        util::pagination::{Page, PageParams, SortDir},
    },
};

pub struct CommentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists approved comments on a work, newest first.
    pub async fn list_for_work(
        &self,
        work_id: i32,
        page: PageParams,
    ) -> Result<Page<Comment>, AppError> {
        self.ensure_work(work_id).await?;

        let param = CommentListParam {
            page,
            work_id: Some(work_id),
            status: Some(CommentStatus::Approved),
            ..Default::default()
        };
        self.list(&param).await
    }

    /// Lists comments for moderation, oldest first. Defaults to pending comments.
    pub async fn list_for_review(
        &self,
        mut param: CommentListParam,
    ) -> Result<Page<Comment>, AppError> {
        param.status = param.status.or(Some(CommentStatus::Pending));
        param.sort_dir = SortDir::Asc;
        self.list(&param).await
    }

    /// Posts a comment on an existing work. New comments await review.
    pub async fn create(
        &self,
        author_id: i32,
        work_id: i32,
        content: String,
    ) -> Result<Comment, AppError> {
        self.ensure_work(work_id).await?;

        let comment = CommentRepository::new(self.db)
            .create(author_id, work_id, content)
            .await?;
        tracing::info!("Comment {} posted on work {}", comment.id, work_id);

        Ok(comment)
    }

    /// Edits a comment. Only its author may do so.
    pub async fn update(&self, user_id: i32, id: i32, content: String) -> Result<Comment, AppError> {
        let comment_repo = CommentRepository::new(self.db);
        let comment = comment_repo.find_by_id(id).await?.ok_or_else(comment_not_found)?;

        if comment.author_id != user_id {
            return Err(AuthError::AccessDenied(
                user_id,
                format!("comment {} belongs to user {}", id, comment.author_id),
            )
            .into());
        }

        comment_repo
            .update_content(id, content)
            .await?
            .ok_or_else(comment_not_found)
    }

    /// Soft-deletes a comment. Allowed for its author and for staff.
    pub async fn delete(&self, actor: AuthUser, id: i32) -> Result<(), AppError> {
        let comment_repo = CommentRepository::new(self.db);
        let comment = comment_repo.find_by_id(id).await?.ok_or_else(comment_not_found)?;

        if comment.author_id != actor.id && !actor.has(Permission::Admin) {
            return Err(AuthError::AccessDenied(
                actor.id,
                format!("comment {} belongs to user {}", id, comment.author_id),
            )
            .into());
        }

        comment_repo.soft_delete(id).await?;

        Ok(())
    }

    pub async fn like(&self, id: i32) -> Result<i32, AppError> {
        CommentRepository::new(self.db)
            .like(id)
            .await?
            .ok_or_else(comment_not_found)
    }

    pub async fn review(
        &self,
        reviewer_id: i32,
        id: i32,
        action: CommentReviewAction,
    ) -> Result<Comment, AppError> {
        let comment = CommentRepository::new(self.db)
            .review(id, reviewer_id, review_target(action))
            .await?
            .ok_or_else(comment_not_found)?;

        tracing::info!("Comment {} reviewed by {}: {:?}", id, reviewer_id, action);

        Ok(comment)
    }

    async fn list(&self, param: &CommentListParam) -> Result<Page<Comment>, AppError> {
        let (comments, total) = CommentRepository::new(self.db).get_paginated(param).await?;

        Ok(Page::new(comments, total, param.page))
    }

    async fn ensure_work(&self, work_id: i32) -> Result<(), AppError> {
        WorkRepository::new(self.db)
            .find_by_id(work_id)
            .await?
            .map(|_| ())
            .ok_or_else(work_not_found)
    }
}

fn comment_not_found() -> AppError {
    AppError::NotFound("Comment not found".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use entity::sea_orm_active_enums::Role;
    use test_utils::{
        builder::TestBuilder,
        factory::{
            comment::{create_comment, CommentFactory},
            helpers::create_work_with_author,
            user::create_user,
        },
    };

    /// Tests new comments start pending and only approved ones are public.
    ///
    /// Expected: created comment pending, public list holds the approved one
    #[tokio::test]
    async fn public_list_shows_approved_only() -> Result<(), AppError> {
        let test = TestBuilder::new().with_work_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let (author, work) = create_work_with_author(db).await?;
        let approved = CommentFactory::new(db, author.id, work.id)
            .status(CommentStatus::Approved)
            .build()
            .await?;
        CommentFactory::new(db, author.id, work.id)
            .status(CommentStatus::Approved)
            .deleted()
            .build()
            .await?;
        let service = CommentService::new(db);

        let created = service
            .create(author.id, work.id, "Beautiful lines".to_string())
            .await?;
        assert_eq!(created.status, CommentStatus::Pending);

        let page = service.list_for_work(work.id, PageParams::default()).await?;
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].id, approved.id);

        Ok(())
    }

    /// Tests commenting on a missing work.
    ///
    /// Expected: Err(AppError::NotFound("Work not found"))
    #[tokio::test]
    async fn rejects_comment_on_missing_work() -> Result<(), AppError> {
        let test = TestBuilder::new().with_work_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let user = create_user(db).await?;

        let result = CommentService::new(db)
            .create(user.id, 404, "Hello".to_string())
            .await;

        match result {
            Err(AppError::NotFound(msg)) => assert_eq!(msg, "Work not found"),
            other => panic!("expected NotFound, got {:?}", other.map(|c| c.id)),
        }

        Ok(())
    }

    /// Tests delete permissions: strangers denied, staff and authors allowed.
    ///
    /// Expected: AccessDenied for another member, Ok for an editor
    #[tokio::test]
    async fn staff_or_author_may_delete() -> Result<(), AppError> {
        let test = TestBuilder::new().with_work_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let (author, work) = create_work_with_author(db).await?;
        let stranger = create_user(db).await?;
        let comment = create_comment(db, author.id, work.id).await?;
        let service = CommentService::new(db);

        let denied = service
            .delete(
                AuthUser {
                    id: stranger.id,
                    role: Role::Member,
                },
                comment.id,
            )
            .await;
        assert!(matches!(
            denied,
            Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
        ));

        service
            .delete(
                AuthUser {
                    id: stranger.id,
                    role: Role::Editor,
                },
                comment.id,
            )
            .await?;
        assert!(matches!(service.like(comment.id).await, Err(AppError::NotFound(_))));

        Ok(())
    }

    /// Tests the moderation queue and review transitions.
    ///
    /// Expected: pending listed oldest first; hide then unhide ends approved
    #[tokio::test]
    async fn moderates_comments() -> Result<(), AppError> {
        let test = TestBuilder::new().with_work_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let (author, work) = create_work_with_author(db).await?;
        let reviewer = create_user(db).await?;
        let first = create_comment(db, author.id, work.id).await?;
        let second = create_comment(db, author.id, work.id).await?;
        let service = CommentService::new(db);

        let queue = service.list_for_review(CommentListParam::default()).await?;
        assert_eq!(
            queue.items.iter().map(|c| c.id).collect::<Vec<_>>(),
            vec![first.id, second.id]
        );

        let hidden = service
            .review(reviewer.id, first.id, CommentReviewAction::Hide)
            .await?;
        assert_eq!(hidden.status, CommentStatus::Hidden);
        assert_eq!(hidden.reviewed_by, Some(reviewer.id));

        let restored = service
            .review(reviewer.id, first.id, CommentReviewAction::Unhide)
            .await?;
        assert_eq!(restored.status, CommentStatus::Approved);

        assert_eq!(service.list_for_review(CommentListParam::default()).await?.total, 1);

        Ok(())
    }

    /// Tests only the author can edit a comment.
    ///
    /// Expected: AccessDenied for others; content changed for the author
    #[tokio::test]
    async fn author_edits_comment() -> Result<(), AppError> {
        let test = TestBuilder::new().with_work_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let (author, work) = create_work_with_author(db).await?;
        let other = create_user(db).await?;
        let comment = create_comment(db, author.id, work.id).await?;
        let service = CommentService::new(db);

        assert!(matches!(
            service.update(other.id, comment.id, "Edited".to_string()).await,
            Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
        ));

        let edited = service
            .update(author.id, comment.id, "Edited".to_string())
            .await?;
        assert_eq!(edited.content, "Edited");
        assert_eq!(service.like(comment.id).await?, 1);

        Ok(())
    }
}
