//! Activity and participant domain models.

use chrono::{DateTime, NaiveDate, Utc};
use entity::sea_orm_active_enums::{ActivityStatus, ParticipantStatus};

use crate::{
    model::{
        activity::{ActivityDto, CreateActivityDto, ParticipantDto, UpdateActivityDto},
        api::ListQueryDto,
    },
    server::{
        error::AppError,
        model::user::UserSummary,
        util::{
            pagination::{parse_sort_by, PageParams, SortDir},
            parse::{parse_date, parse_enum_param, search_term},
        },
    },
};

/// Non-deleted activity with its derived participant count.
#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub date: NaiveDate,
    pub time: Option<String>,
    pub location: Option<String>,
    pub instructor: Option<String>,
    pub status: ActivityStatus,
    /// `0` means unlimited.
    pub max_participants: i32,
    pub current_participants: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Activity {
    pub fn from_entity(entity: entity::activity::Model, current_participants: u64) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            image_url: entity.image_url,
            date: entity.date,
            time: entity.time,
            location: entity.location,
            instructor: entity.instructor,
            status: entity.status,
            max_participants: entity.max_participants,
            current_participants,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Whether another registration would exceed capacity.
    pub fn is_full(&self) -> bool {
        self.max_participants > 0 && self.current_participants >= self.max_participants as u64
    }

    pub fn into_dto(self) -> ActivityDto {
        ActivityDto {
            id: self.id,
            title: self.title,
            description: self.description,
            image_url: self.image_url,
            date: self.date,
            time: self.time,
            location: self.location,
            instructor: self.instructor,
            status: self.status,
            max_participants: self.max_participants,
            current_participants: self.current_participants,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Participant {
    pub id: i32,
    pub activity_id: i32,
    pub user_id: i32,
    pub status: ParticipantStatus,
    pub notes: Option<String>,
    pub registered_at: DateTime<Utc>,
    pub user: Option<UserSummary>,
}

impl Participant {
    pub fn from_entity(
        entity: entity::activity_participant::Model,
        user: Option<entity::user::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            activity_id: entity.activity_id,
            user_id: entity.user_id,
            status: entity.status,
            notes: entity.notes,
            registered_at: entity.created_at,
            user: user.map(UserSummary::from_entity),
        }
    }

    pub fn into_dto(self) -> ParticipantDto {
        ParticipantDto {
            id: self.id,
            activity_id: self.activity_id,
            user_id: self.user_id,
            status: self.status,
            notes: self.notes,
            registered_at: self.registered_at,
            user: self.user.map(UserSummary::into_dto),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateActivityParam {
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub date: NaiveDate,
    pub time: Option<String>,
    pub location: Option<String>,
    pub instructor: Option<String>,
    pub max_participants: i32,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateActivityParam {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
    pub location: Option<String>,
    pub instructor: Option<String>,
    pub max_participants: Option<i32>,
    pub status: Option<ActivityStatus>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivitySortField {
    Date,
    CreatedAt,
    Title,
}

#[derive(Debug, Clone)]
pub struct ActivityListParam {
    pub page: PageParams,
    pub search: Option<String>,
    pub status: Option<ActivityStatus>,
    pub sort_by: ActivitySortField,
    pub sort_dir: SortDir,
}

impl Default for ActivityListParam {
    fn default() -> Self {
        Self {
            page: PageParams::default(),
            search: None,
            status: None,
            sort_by: ActivitySortField::Date,
            sort_dir: SortDir::Asc,
        }
    }
}

impl CreateActivityParam {
    pub fn from_dto(dto: CreateActivityDto) -> Result<Self, AppError> {
        Ok(Self {
            date: parse_date(&dto.date)?,
            title: dto.title,
            description: dto.description,
            image_url: dto.image_url,
            time: dto.time,
            location: dto.location,
            instructor: dto.instructor,
            max_participants: dto.max_participants.unwrap_or(0),
        })
    }
}

impl UpdateActivityParam {
    pub fn from_dto(dto: UpdateActivityDto) -> Result<Self, AppError> {
        Ok(Self {
            date: dto.date.as_deref().map(parse_date).transpose()?,
            title: dto.title,
            description: dto.description,
            image_url: dto.image_url,
            time: dto.time,
            location: dto.location,
            instructor: dto.instructor,
            max_participants: dto.max_participants,
            status: dto.status,
        })
    }
}

impl ActivityListParam {
    /// `sort_by` accepts `date`, `created_at` or `title`; defaults to date ascending.
    pub fn from_query(query: &ListQueryDto) -> Result<Self, AppError> {
        Ok(Self {
            page: PageParams::new(query.page, query.per_page),
            search: search_term(query.search.as_deref()),
            status: parse_enum_param("status", query.status.as_deref())?,
            sort_by: parse_sort_by(
                query.sort_by.as_deref(),
                &[
                    ("date", ActivitySortField::Date),
                    ("created_at", ActivitySortField::CreatedAt),
                    ("title", ActivitySortField::Title),
                ],
                ActivitySortField::Date,
            )?,
            sort_dir: SortDir::parse(query.sort_dir.as_deref(), SortDir::Asc)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activity(max_participants: i32, current_participants: u64) -> Activity {
        let now = Utc::now();
        Activity {
            id: 1,
            title: "Poetry night".to_string(),
            description: None,
            image_url: None,
            date: NaiveDate::from_ymd_opt(2026, 5, 1).unwrap(),
            time: None,
            location: None,
            instructor: None,
            status: ActivityStatus::Upcoming,
            max_participants,
            current_participants,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn zero_capacity_is_never_full() {
        assert!(!activity(0, 500).is_full());
    }

    #[test]
    fn full_at_capacity() {
        assert!(!activity(2, 1).is_full());
        assert!(activity(2, 2).is_full());
    }
}
