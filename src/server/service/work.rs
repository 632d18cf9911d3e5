//! Work submission, public browsing, likes and review.

use entity::sea_orm_active_enums::WorkStatus;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::work::WorkRepository,
    error::{auth::AuthError, AppError},
    model::work::{CreateWorkParam, UpdateWorkParam, Work, WorkListParam, WorkReview, WorkSortField},
    util::pagination::{Page, SortDir},
};

pub struct WorkService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WorkService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists approved works. Any status on `param` is overridden.
    pub async fn list_public(&self, mut param: WorkListParam) -> Result<Page<Work>, AppError> {
        param.status = Some(WorkStatus::Approved);
        self.list(&param).await
    }

    /// Lists the author's own works in any status.
    pub async fn list_by_author(
        &self,
        author_id: i32,
        mut param: WorkListParam,
    ) -> Result<Page<Work>, AppError> {
        param.author_id = Some(author_id);
        self.list(&param).await
    }

    /// Lists works awaiting review, oldest first.
    pub async fn list_pending(&self, mut param: WorkListParam) -> Result<Page<Work>, AppError> {
        param.status = Some(WorkStatus::Pending);
        param.sort_by = WorkSortField::CreatedAt;
        param.sort_dir = SortDir::Asc;
        self.list(&param).await
    }

    /// Gets an approved work and counts the view.
    ///
    /// # Returns
    /// - `Ok(Work)` - The work with the incremented view count
    /// - `Err(AppError::NotFound)` - Missing or not approved
    pub async fn view(&self, id: i32) -> Result<Work, AppError> {
        let work_repo = WorkRepository::new(self.db);

        match work_repo.find_by_id(id).await? {
            Some(work) if work.status == WorkStatus::Approved => {}
            _ => return Err(work_not_found()),
        }

        work_repo.increment_views(id).await?;
        work_repo.find_by_id(id).await?.ok_or_else(work_not_found)
    }

    pub async fn create(&self, param: CreateWorkParam) -> Result<Work, AppError> {
        let work = WorkRepository::new(self.db).create(param).await?;
        tracing::info!("Work {} submitted by {}", work.id, work.author_id);

        Ok(work)
    }

    /// Updates a work owned by `user_id`.
    pub async fn update(
        &self,
        user_id: i32,
        id: i32,
        param: UpdateWorkParam,
    ) -> Result<Work, AppError> {
        self.owned(user_id, id).await?;

        WorkRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or_else(work_not_found)
    }

    /// Deletes a work owned by `user_id`. Its comments go with it.
    pub async fn delete(&self, user_id: i32, id: i32) -> Result<(), AppError> {
        self.owned(user_id, id).await?;
        WorkRepository::new(self.db).delete(id).await?;

        Ok(())
    }

    pub async fn like(&self, id: i32) -> Result<i32, AppError> {
        WorkRepository::new(self.db)
            .like(id)
            .await?
            .ok_or_else(work_not_found)
    }

    /// Removes a like. The counter never drops below zero.
    pub async fn unlike(&self, id: i32) -> Result<i32, AppError> {
        WorkRepository::new(self.db)
            .unlike(id)
            .await?
            .ok_or_else(work_not_found)
    }

    pub async fn review(
        &self,
        reviewer_id: i32,
        id: i32,
        review: WorkReview,
    ) -> Result<Work, AppError> {
        let work = WorkRepository::new(self.db)
            .review(id, reviewer_id, review)
            .await?
            .ok_or_else(work_not_found)?;

        tracing::info!("Work {} reviewed by {}: {:?}", id, reviewer_id, work.status);

        Ok(work)
    }

    async fn list(&self, param: &WorkListParam) -> Result<Page<Work>, AppError> {
        let (works, total) = WorkRepository::new(self.db).get_paginated(param).await?;

        Ok(Page::new(works, total, param.page))
    }

    async fn owned(&self, user_id: i32, id: i32) -> Result<Work, AppError> {
        let work = WorkRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(work_not_found)?;

        if work.author_id != user_id {
            return Err(AuthError::AccessDenied(
                user_id,
                format!("work {} belongs to user {}", id, work.author_id),
            )
            .into());
        }

        Ok(work)
    }
}

pub(crate) fn work_not_found() -> AppError {
    AppError::NotFound("Work not found".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use entity::sea_orm_active_enums::WorkType;
    use test_utils::{
        builder::TestBuilder,
        factory::{
            user::create_user,
            work::{create_approved_work, create_work, WorkFactory},
        },
    };

    /// Tests the public list only contains approved works.
    ///
    /// Expected: pending and rejected works excluded
    #[tokio::test]
    async fn public_list_shows_approved_only() -> Result<(), AppError> {
        let test = TestBuilder::new().with_work_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let author = create_user(db).await?;
        let approved = create_approved_work(db, author.id).await?;
        create_work(db, author.id).await?;
        WorkFactory::new(db, author.id)
            .status(WorkStatus::Rejected)
            .build()
            .await?;

        let page = WorkService::new(db)
            .list_public(WorkListParam {
                status: Some(WorkStatus::Pending),
                ..Default::default()
            })
            .await?;

        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].id, approved.id);
        assert_eq!(page.items[0].author.as_ref().map(|a| a.id), Some(author.id));

        Ok(())
    }

    /// Tests viewing an approved work increments its views.
    ///
    /// Expected: views goes from 5 to 6; pending work is NotFound
    #[tokio::test]
    async fn view_counts_and_hides_unapproved() -> Result<(), AppError> {
        let test = TestBuilder::new().with_work_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let author = create_user(db).await?;
        let approved = WorkFactory::new(db, author.id)
            .status(WorkStatus::Approved)
            .views(5)
            .build()
            .await?;
        let pending = create_work(db, author.id).await?;
        let service = WorkService::new(db);

        let viewed = service.view(approved.id).await?;

        assert_eq!(viewed.views, 6);
        assert!(matches!(service.view(pending.id).await, Err(AppError::NotFound(_))));

        Ok(())
    }

    /// Tests only the author may update or delete a work.
    ///
    /// Expected: AccessDenied for another member, Ok for the author
    #[tokio::test]
    async fn restricts_changes_to_author() -> Result<(), AppError> {
        let test = TestBuilder::new().with_work_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let author = create_user(db).await?;
        let other = create_user(db).await?;
        let work = create_work(db, author.id).await?;
        let service = WorkService::new(db);

        let denied = service
            .update(
                other.id,
                work.id,
                UpdateWorkParam {
                    title: Some("Stolen".to_string()),
                    ..Default::default()
                },
            )
            .await;
        assert!(matches!(
            denied,
            Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
        ));
        assert!(matches!(
            service.delete(other.id, work.id).await,
            Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
        ));

        let updated = service
            .update(
                author.id,
                work.id,
                UpdateWorkParam {
                    work_type: Some(WorkType::Prose),
                    ..Default::default()
                },
            )
            .await?;
        assert_eq!(updated.work_type, WorkType::Prose);
        assert_eq!(updated.title, work.title);

        service.delete(author.id, work.id).await?;
        assert!(matches!(service.like(work.id).await, Err(AppError::NotFound(_))));

        Ok(())
    }

    /// Tests unlike never drives the counter negative.
    ///
    /// Expected: 0 -> like 1 -> unlike 0 -> unlike 0
    #[tokio::test]
    async fn likes_never_go_negative() -> Result<(), AppError> {
        let test = TestBuilder::new().with_work_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let author = create_user(db).await?;
        let work = create_approved_work(db, author.id).await?;
        let service = WorkService::new(db);

        assert_eq!(service.like(work.id).await?, 1);
        assert_eq!(service.unlike(work.id).await?, 0);
        assert_eq!(service.unlike(work.id).await?, 0);

        Ok(())
    }

    /// Tests approve records the note and reject records the reason.
    ///
    /// Expected: status, reviewer and the respective text column set
    #[tokio::test]
    async fn records_review_decisions() -> Result<(), AppError> {
        let test = TestBuilder::new().with_work_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let author = create_user(db).await?;
        let reviewer = create_user(db).await?;
        let first = create_work(db, author.id).await?;
        let second = create_work(db, author.id).await?;
        let service = WorkService::new(db);

        assert_eq!(service.list_pending(WorkListParam::default()).await?.total, 2);

        let approved = service
            .review(
                reviewer.id,
                first.id,
                WorkReview::Approve {
                    note: Some("Lovely imagery".to_string()),
                },
            )
            .await?;
        let rejected = service
            .review(
                reviewer.id,
                second.id,
                WorkReview::Reject {
                    reason: Some("Off topic".to_string()),
                },
            )
            .await?;

        assert_eq!(approved.status, WorkStatus::Approved);
        assert_eq!(approved.review_note.as_deref(), Some("Lovely imagery"));
        assert_eq!(approved.reviewed_by, Some(reviewer.id));
        assert!(approved.reviewed_at.is_some());
        assert_eq!(rejected.status, WorkStatus::Rejected);
        assert_eq!(rejected.reject_reason.as_deref(), Some("Off topic"));
        assert_eq!(service.list_pending(WorkListParam::default()).await?.total, 0);

        Ok(())
    }
}
