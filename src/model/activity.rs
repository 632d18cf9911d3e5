use chrono::{DateTime, NaiveDate, Utc};
use entity::sea_orm_active_enums::{ActivityStatus, ParticipantStatus};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::model::user::UserSummaryDto;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ActivityDto {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub date: NaiveDate,
    pub time: Option<String>,
    pub location: Option<String>,
    pub instructor: Option<String>,
    pub status: ActivityStatus,
    pub max_participants: i32,
    pub current_participants: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ParticipantDto {
    pub id: i32,
    pub activity_id: i32,
    pub user_id: i32,
    pub status: ParticipantStatus,
    pub notes: Option<String>,
    pub registered_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserSummaryDto>,
}

/// Date arrives as `YYYY-MM-DD` and is parsed by the controller.
#[derive(Deserialize, Debug, Validate)]
pub struct CreateActivityDto {
    #[validate(length(min = 1, max = 200, message = "title must be 1-200 characters"))]
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub date: String,
    #[validate(length(max = 50))]
    pub time: Option<String>,
    pub location: Option<String>,
    #[validate(length(max = 100))]
    pub instructor: Option<String>,
    #[validate(range(min = 0, message = "max_participants must not be negative"))]
    pub max_participants: Option<i32>,
}

#[derive(Deserialize, Debug, Default, Validate)]
pub struct UpdateActivityDto {
    #[validate(length(min = 1, max = 200, message = "title must be 1-200 characters"))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub date: Option<String>,
    #[validate(length(max = 50))]
    pub time: Option<String>,
    pub location: Option<String>,
    #[validate(length(max = 100))]
    pub instructor: Option<String>,
    #[validate(range(min = 0, message = "max_participants must not be negative"))]
    pub max_participants: Option<i32>,
    pub status: Option<ActivityStatus>,
}

#[derive(Deserialize, Debug, Validate)]
pub struct UpdateActivityStatusDto {
    pub status: ActivityStatus,
}
