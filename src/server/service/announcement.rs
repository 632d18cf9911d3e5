//! Site announcements.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::announcement::AnnouncementRepository,
    error::AppError,
    model::site::{
        Announcement, AnnouncementListParam, CreateAnnouncementParam, UpdateAnnouncementParam,
    },
    util::pagination::{Page, PageParams},
};

pub struct AnnouncementService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AnnouncementService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list_published(&self, page: PageParams) -> Result<Page<Announcement>, AppError> {
        let (announcements, total) = AnnouncementRepository::new(self.db)
            .get_published(page)
            .await?;

        Ok(Page::new(announcements, total, page))
    }

    pub async fn list(
        &self,
        param: &AnnouncementListParam,
    ) -> Result<Page<Announcement>, AppError> {
        let (announcements, total) = AnnouncementRepository::new(self.db)
            .get_paginated(param)
            .await?;

        Ok(Page::new(announcements, total, param.page))
    }

    /// Creates a draft authored by the caller.
    pub async fn create(&self, param: CreateAnnouncementParam) -> Result<Announcement, AppError> {
        Ok(AnnouncementRepository::new(self.db).create(param).await?)
    }

    pub async fn update(
        &self,
        id: i32,
        param: UpdateAnnouncementParam,
    ) -> Result<Announcement, AppError> {
        AnnouncementRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or_else(announcement_not_found)
    }

    pub async fn publish(&self, id: i32) -> Result<Announcement, AppError> {
        let announcement = AnnouncementRepository::new(self.db)
            .publish(id)
            .await?
            .ok_or_else(announcement_not_found)?;

        tracing::info!("Announcement {} published", id);

        Ok(announcement)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !AnnouncementRepository::new(self.db).delete(id).await? {
            return Err(announcement_not_found());
        }

        Ok(())
    }
}

fn announcement_not_found() -> AppError {
    AppError::NotFound("Announcement not found".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use entity::sea_orm_active_enums::AnnouncementStatus;
    use test_utils::{
        builder::TestBuilder,
        factory::{announcement::AnnouncementFactory, user::create_user},
    };

    /// Tests drafts stay private until published.
    ///
    /// Expected: created as draft, listed publicly after publish with a timestamp
    #[tokio::test]
    async fn publishes_drafts() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .with_table(entity::prelude::Announcement)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let editor = create_user(db).await?;
        let service = AnnouncementService::new(db);

        let draft = service
            .create(CreateAnnouncementParam {
                title: "Summer reading".to_string(),
                content: "Join us".to_string(),
                author_id: editor.id,
            })
            .await?;
        assert_eq!(draft.status, AnnouncementStatus::Draft);
        assert_eq!(service.list_published(PageParams::default()).await?.total, 0);

        let published = service.publish(draft.id).await?;
        assert_eq!(published.status, AnnouncementStatus::Published);
        assert!(published.published_at.is_some());
        assert_eq!(service.list_published(PageParams::default()).await?.total, 1);

        Ok(())
    }

    /// Tests public ordering by publication time.
    ///
    /// Expected: most recently published first
    #[tokio::test]
    async fn orders_by_published_at() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .with_table(entity::prelude::Announcement)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let editor = create_user(db).await?;
        let now = Utc::now();
        let older = AnnouncementFactory::new(db, editor.id)
            .published_at(now - Duration::days(2))
            .build()
            .await?;
        let newer = AnnouncementFactory::new(db, editor.id)
            .published_at(now)
            .build()
            .await?;

        let page = AnnouncementService::new(db)
            .list_published(PageParams::default())
            .await?;

        assert_eq!(
            page.items.iter().map(|a| a.id).collect::<Vec<_>>(),
            vec![newer.id, older.id]
        );

        Ok(())
    }
}
