//! Announcement factory.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::AnnouncementStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct AnnouncementFactory<'a> {
    db: &'a DatabaseConnection,
    author_id: i32,
    status: AnnouncementStatus,
    published_at: Option<DateTime<Utc>>,
}

impl<'a> AnnouncementFactory<'a> {
    /// Defaults to a draft announcement.
    pub fn new(db: &'a DatabaseConnection, author_id: i32) -> Self {
        Self {
            db,
            author_id,
            status: AnnouncementStatus::Draft,
            published_at: None,
        }
    }

    /// Marks the announcement published at the given time.
    pub fn published_at(mut self, published_at: DateTime<Utc>) -> Self {
        self.status = AnnouncementStatus::Published;
        self.published_at = Some(published_at);
        self
    }

    pub async fn build(self) -> Result<entity::announcement::Model, DbErr> {
        let now = Utc::now();
        let id = next_id();
        entity::announcement::ActiveModel {
            title: ActiveValue::Set(format!("Announcement {}", id)),
            content: ActiveValue::Set(format!("Announcement body {}", id)),
            status: ActiveValue::Set(self.status),
            published_at: ActiveValue::Set(self.published_at),
            author_id: ActiveValue::Set(self.author_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_announcement(
    db: &DatabaseConnection,
    author_id: i32,
) -> Result<entity::announcement::Model, DbErr> {
    AnnouncementFactory::new(db, author_id).build().await
}
