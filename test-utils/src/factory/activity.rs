//! Activity factory for creating test activity entities.

use crate::factory::helpers::next_id;
use chrono::{NaiveDate, Utc};
use entity::sea_orm_active_enums::ActivityStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test activities with customizable fields.
pub struct ActivityFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    description: Option<String>,
    location: Option<String>,
    date: NaiveDate,
    status: ActivityStatus,
    max_participants: i32,
    deleted: bool,
}

impl<'a> ActivityFactory<'a> {
    /// Creates a new ActivityFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Activity {id}"`
    /// - date: 2026-06-01
    /// - status: `Upcoming`
    /// - max_participants: `0` (unlimited)
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Activity {}", id),
            description: None,
            location: None,
            date: NaiveDate::from_ymd_opt(2026, 6, 1).unwrap_or_default(),
            status: ActivityStatus::Upcoming,
            max_participants: 0,
            deleted: false,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    pub fn status(mut self, status: ActivityStatus) -> Self {
        self.status = status;
        self
    }

    pub fn max_participants(mut self, max_participants: i32) -> Self {
        self.max_participants = max_participants;
        self
    }

    /// Marks the activity as soft deleted.
    pub fn deleted(mut self) -> Self {
        self.deleted = true;
        self
    }

    pub async fn build(self) -> Result<entity::activity::Model, DbErr> {
        let now = Utc::now();
        entity::activity::ActiveModel {
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            location: ActiveValue::Set(self.location),
            date: ActiveValue::Set(self.date),
            status: ActiveValue::Set(self.status),
            max_participants: ActiveValue::Set(self.max_participants),
            deleted_at: ActiveValue::Set(self.deleted.then_some(now)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an upcoming activity with unlimited capacity.
pub async fn create_activity(db: &DatabaseConnection) -> Result<entity::activity::Model, DbErr> {
    ActivityFactory::new(db).build().await
}

/// Creates an upcoming activity with the given capacity.
pub async fn create_activity_with_capacity(
    db: &DatabaseConnection,
    max_participants: i32,
) -> Result<entity::activity::Model, DbErr> {
    ActivityFactory::new(db)
        .max_participants(max_participants)
        .build()
        .await
}
