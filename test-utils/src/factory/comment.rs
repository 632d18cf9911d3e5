//! Comment factory.

use chrono::Utc;
use entity::sea_orm_active_enums::CommentStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct CommentFactory<'a> {
    db: &'a DatabaseConnection,
    author_id: i32,
    work_id: i32,
    content: String,
    status: CommentStatus,
    likes: i32,
    deleted: bool,
}

impl<'a> CommentFactory<'a> {
    /// Defaults to a pending comment with no likes.
    pub fn new(db: &'a DatabaseConnection, author_id: i32, work_id: i32) -> Self {
        Self {
            db,
            author_id,
            work_id,
            content: "A thoughtful comment".to_string(),
            status: CommentStatus::Pending,
            likes: 0,
            deleted: false,
        }
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn status(mut self, status: CommentStatus) -> Self {
        self.status = status;
        self
    }

    pub fn likes(mut self, likes: i32) -> Self {
        self.likes = likes;
        self
    }

    pub fn deleted(mut self) -> Self {
        self.deleted = true;
        self
    }

    pub async fn build(self) -> Result<entity::comment::Model, DbErr> {
        let now = Utc::now();
        entity::comment::ActiveModel {
            content: ActiveValue::Set(self.content),
            status: ActiveValue::Set(self.status),
            author_id: ActiveValue::Set(self.author_id),
            work_id: ActiveValue::Set(self.work_id),
            likes: ActiveValue::Set(self.likes),
            replies: ActiveValue::Set(0),
            deleted_at: ActiveValue::Set(self.deleted.then_some(now)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_comment(
    db: &DatabaseConnection,
    author_id: i32,
    work_id: i32,
) -> Result<entity::comment::Model, DbErr> {
    CommentFactory::new(db, author_id, work_id).build().await
}
