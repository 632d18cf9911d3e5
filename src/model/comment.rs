use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::CommentStatus;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::model::user::UserSummaryDto;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CommentDto {
    pub id: i32,
    pub content: String,
    pub status: CommentStatus,
    pub author_id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<UserSummaryDto>,
    pub work_id: i32,
    pub likes: i32,
    pub replies: i32,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub reviewed_by: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Deserialize, Debug, Validate)]
pub struct CreateCommentDto {
    #[validate(length(min = 1, max = 2000, message = "content must be 1-2000 characters"))]
    pub content: String,
}

#[derive(Deserialize, Debug, Validate)]
pub struct UpdateCommentDto {
    #[validate(length(min = 1, max = 2000, message = "content must be 1-2000 characters"))]
    pub content: String,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CommentReviewAction {
    Approve,
    Reject,
    Hide,
    Unhide,
    Pend,
}

#[derive(Deserialize, Debug, Validate)]
pub struct ReviewCommentDto {
    pub action: CommentReviewAction,
}
