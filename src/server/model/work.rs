//! Work (member submission) domain models.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{WorkStatus, WorkType};

use crate::{
    model::{
        api::ListQueryDto,
        work::{CreateWorkDto, ReviewWorkDto, UpdateWorkDto, WorkDto, WorkReviewAction},
    },
    server::{
        error::AppError,
        model::user::UserSummary,
        util::{
            pagination::{parse_sort_by, PageParams, SortDir},
            parse::{parse_enum_param, search_term},
        },
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Work {
    pub id: i32,
    pub title: String,
    pub work_type: WorkType,
    pub content: String,
    pub status: WorkStatus,
    pub author_id: i32,
    pub author: Option<UserSummary>,
    pub views: i32,
    pub likes: i32,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub reviewed_by: Option<i32>,
    pub review_note: Option<String>,
    pub reject_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Work {
    pub fn from_entity(entity: entity::work::Model, author: Option<entity::user::Model>) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            work_type: entity.work_type,
            content: entity.content,
            status: entity.status,
            author_id: entity.author_id,
            author: author.map(UserSummary::from_entity),
            views: entity.views,
            likes: entity.likes,
            reviewed_at: entity.reviewed_at,
            reviewed_by: entity.reviewed_by,
            review_note: entity.review_note,
            reject_reason: entity.reject_reason,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> WorkDto {
        WorkDto {
            id: self.id,
            title: self.title,
            work_type: self.work_type,
            content: self.content,
            status: self.status,
            author_id: self.author_id,
            author: self.author.map(UserSummary::into_dto),
            views: self.views,
            likes: self.likes,
            reviewed_at: self.reviewed_at,
            reviewed_by: self.reviewed_by,
            review_note: self.review_note,
            reject_reason: self.reject_reason,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateWorkParam {
    pub author_id: i32,
    pub title: String,
    pub work_type: WorkType,
    pub content: String,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateWorkParam {
    pub title: Option<String>,
    pub work_type: Option<WorkType>,
    pub content: Option<String>,
}

/// Outcome of a reviewer decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkReview {
    Approve { note: Option<String> },
    Reject { reason: Option<String> },
}

impl WorkReview {
    pub fn status(&self) -> WorkStatus {
        match self {
            Self::Approve { .. } => WorkStatus::Approved,
            Self::Reject { .. } => WorkStatus::Rejected,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkSortField {
    CreatedAt,
    Views,
    Likes,
    Title,
}

#[derive(Debug, Clone)]
pub struct WorkListParam {
    pub page: PageParams,
    pub search: Option<String>,
    pub status: Option<WorkStatus>,
    pub work_type: Option<WorkType>,
    pub author_id: Option<i32>,
    pub sort_by: WorkSortField,
    pub sort_dir: SortDir,
}

impl Default for WorkListParam {
    fn default() -> Self {
        Self {
            page: PageParams::default(),
            search: None,
            status: None,
            work_type: None,
            author_id: None,
            sort_by: WorkSortField::CreatedAt,
            sort_dir: SortDir::Desc,
        }
    }
}

impl CreateWorkParam {
    pub fn from_dto(author_id: i32, dto: CreateWorkDto) -> Self {
        Self {
            author_id,
            title: dto.title,
            work_type: dto.work_type,
            content: dto.content,
        }
    }
}

impl UpdateWorkParam {
    pub fn from_dto(dto: UpdateWorkDto) -> Self {
        Self {
            title: dto.title,
            work_type: dto.work_type,
            content: dto.content,
        }
    }
}

impl WorkReview {
    pub fn from_dto(dto: ReviewWorkDto) -> Self {
        match dto.action {
            WorkReviewAction::Approve => Self::Approve { note: dto.note },
            WorkReviewAction::Reject => Self::Reject { reason: dto.reason },
        }
    }
}

impl WorkListParam {
    /// `type` filters by work type; `sort_by` accepts `created_at`, `views`,
    /// `likes` or `title`.
    pub fn from_query(query: &ListQueryDto) -> Result<Self, AppError> {
        Ok(Self {
            page: PageParams::new(query.page, query.per_page),
            search: search_term(query.search.as_deref()),
            status: parse_enum_param("status", query.status.as_deref())?,
            work_type: parse_enum_param("type", query.kind.as_deref())?,
            author_id: None,
            sort_by: parse_sort_by(
                query.sort_by.as_deref(),
                &[
                    ("created_at", WorkSortField::CreatedAt),
                    ("views", WorkSortField::Views),
                    ("likes", WorkSortField::Likes),
                    ("title", WorkSortField::Title),
                ],
                WorkSortField::CreatedAt,
            )?,
            sort_dir: SortDir::parse(query.sort_dir.as_deref(), SortDir::Desc)?,
        })
    }
}
