//! Work factory for creating test literary works.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::sea_orm_active_enums::{WorkStatus, WorkType};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test works with customizable fields.
pub struct WorkFactory<'a> {
    db: &'a DatabaseConnection,
    author_id: i32,
    title: String,
    content: String,
    work_type: WorkType,
    status: WorkStatus,
    views: i32,
    likes: i32,
}

impl<'a> WorkFactory<'a> {
    /// Creates a new WorkFactory for the given author.
    ///
    /// Defaults:
    /// - title: `"Work {id}"`
    /// - type: `Poetry`
    /// - status: `Pending`
    /// - views/likes: `0`
    pub fn new(db: &'a DatabaseConnection, author_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            author_id,
            title: format!("Work {}", id),
            content: format!("Content of work {}", id),
            work_type: WorkType::Poetry,
            status: WorkStatus::Pending,
            views: 0,
            likes: 0,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn work_type(mut self, work_type: WorkType) -> Self {
        self.work_type = work_type;
        self
    }

    pub fn status(mut self, status: WorkStatus) -> Self {
        self.status = status;
        self
    }

    pub fn views(mut self, views: i32) -> Self {
        self.views = views;
        self
    }

    pub fn likes(mut self, likes: i32) -> Self {
        self.likes = likes;
        self
    }

    pub async fn build(self) -> Result<entity::work::Model, DbErr> {
        let now = Utc::now();
        entity::work::ActiveModel {
            title: ActiveValue::Set(self.title),
            work_type: ActiveValue::Set(self.work_type),
            content: ActiveValue::Set(self.content),
            status: ActiveValue::Set(self.status),
            author_id: ActiveValue::Set(self.author_id),
            views: ActiveValue::Set(self.views),
            likes: ActiveValue::Set(self.likes),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending poetry work for the given author.
pub async fn create_work(
    db: &DatabaseConnection,
    author_id: i32,
) -> Result<entity::work::Model, DbErr> {
    WorkFactory::new(db, author_id).build().await
}

/// Creates an approved work for the given author.
pub async fn create_approved_work(
    db: &DatabaseConnection,
    author_id: i32,
) -> Result<entity::work::Model, DbErr> {
    WorkFactory::new(db, author_id)
        .status(WorkStatus::Approved)
        .build()
        .await
}
