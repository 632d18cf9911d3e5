//! Event factory.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::EventStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct EventFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    start_at: Option<DateTime<Utc>>,
    status: EventStatus,
}

impl<'a> EventFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            title: format!("Event {}", next_id()),
            start_at: None,
            status: EventStatus::Planned,
        }
    }

    pub fn start_at(mut self, start_at: DateTime<Utc>) -> Self {
        self.start_at = Some(start_at);
        self
    }

    pub fn status(mut self, status: EventStatus) -> Self {
        self.status = status;
        self
    }

    pub async fn build(self) -> Result<entity::event::Model, DbErr> {
        let now = Utc::now();
        entity::event::ActiveModel {
            title: ActiveValue::Set(self.title),
            start_at: ActiveValue::Set(self.start_at),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_event(db: &DatabaseConnection) -> Result<entity::event::Model, DbErr> {
    EventFactory::new(db).build().await
}
