//! Comment domain models.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::CommentStatus;

use crate::{
    model::{
        api::ListQueryDto,
        comment::{CommentDto, CommentReviewAction},
    },
    server::{
        error::AppError,
        model::user::UserSummary,
        util::{
            pagination::{PageParams, SortDir},
            parse::{parse_enum_param, search_term},
        },
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: i32,
    pub content: String,
    pub status: CommentStatus,
    pub author_id: i32,
    pub author: Option<UserSummary>,
    pub work_id: i32,
    pub likes: i32,
    pub replies: i32,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub reviewed_by: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    pub fn from_entity(
        entity: entity::comment::Model,
        author: Option<entity::user::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            content: entity.content,
            status: entity.status,
            author_id: entity.author_id,
            author: author.map(UserSummary::from_entity),
            work_id: entity.work_id,
            likes: entity.likes,
            replies: entity.replies,
            reviewed_at: entity.reviewed_at,
            reviewed_by: entity.reviewed_by,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> CommentDto {
        CommentDto {
            id: self.id,
            content: self.content,
            status: self.status,
            author_id: self.author_id,
            author: self.author.map(UserSummary::into_dto),
            work_id: self.work_id,
            likes: self.likes,
            replies: self.replies,
            reviewed_at: self.reviewed_at,
            reviewed_by: self.reviewed_by,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Status a review action moves a comment to.
pub fn review_target(action: CommentReviewAction) -> CommentStatus {
    match action {
        CommentReviewAction::Approve | CommentReviewAction::Unhide => CommentStatus::Approved,
        CommentReviewAction::Reject => CommentStatus::Rejected,
        CommentReviewAction::Hide => CommentStatus::Hidden,
        CommentReviewAction::Pend => CommentStatus::Pending,
    }
}

#[derive(Debug, Clone)]
pub struct CommentListParam {
    pub page: PageParams,
    pub work_id: Option<i32>,
    pub search: Option<String>,
    pub status: Option<CommentStatus>,
    /// Ordering by `created_at`.
    pub sort_dir: SortDir,
}

impl Default for CommentListParam {
    fn default() -> Self {
        Self {
            page: PageParams::default(),
            work_id: None,
            search: None,
            status: None,
            sort_dir: SortDir::Desc,
        }
    }
}

impl CommentListParam {
    /// Review queue options: pending by default, oldest first.
    pub fn for_review(query: &ListQueryDto) -> Result<Self, AppError> {
        Ok(Self {
            page: PageParams::new(query.page, query.per_page),
            work_id: None,
            search: search_term(query.search.as_deref()),
            status: Some(
                parse_enum_param("status", query.status.as_deref())?
                    .unwrap_or(CommentStatus::Pending),
            ),
            sort_dir: SortDir::parse(query.sort_dir.as_deref(), SortDir::Asc)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_review_actions_to_statuses() {
        assert_eq!(review_target(CommentReviewAction::Approve), CommentStatus::Approved);
        assert_eq!(review_target(CommentReviewAction::Reject), CommentStatus::Rejected);
        assert_eq!(review_target(CommentReviewAction::Hide), CommentStatus::Hidden);
        assert_eq!(review_target(CommentReviewAction::Unhide), CommentStatus::Approved);
        assert_eq!(review_target(CommentReviewAction::Pend), CommentStatus::Pending);
    }
}
