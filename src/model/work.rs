use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{WorkStatus, WorkType};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::model::user::UserSummaryDto;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct WorkDto {
    pub id: i32,
    pub title: String,
    #[serde(rename = "type")]
    pub work_type: WorkType,
    pub content: String,
    pub status: WorkStatus,
    pub author_id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<UserSummaryDto>,
    pub views: i32,
    pub likes: i32,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub reviewed_by: Option<i32>,
    pub review_note: Option<String>,
    pub reject_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Deserialize, Debug, Validate)]
pub struct CreateWorkDto {
    #[validate(length(min = 1, max = 200, message = "title must be 1-200 characters"))]
    pub title: String,
    #[serde(rename = "type")]
    pub work_type: WorkType,
    #[validate(length(min = 1, message = "content is required"))]
    pub content: String,
}

#[derive(Deserialize, Debug, Default, Validate)]
pub struct UpdateWorkDto {
    #[validate(length(min = 1, max = 200, message = "title must be 1-200 characters"))]
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub work_type: Option<WorkType>,
    #[validate(length(min = 1, message = "content must not be empty"))]
    pub content: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WorkReviewAction {
    Approve,
    Reject,
}

#[derive(Deserialize, Debug, Validate)]
pub struct ReviewWorkDto {
    pub action: WorkReviewAction,
    #[validate(length(max = 500))]
    pub note: Option<String>,
    #[validate(length(max = 500))]
    pub reason: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LikesDto {
    pub likes: i32,
}
