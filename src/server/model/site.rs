//! Carousel and announcement domain models.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{AnnouncementStatus, CarouselStatus};

use crate::{
    model::{
        api::ListQueryDto,
        site::{
            AnnouncementDto, CarouselDto, CreateAnnouncementDto, CreateCarouselDto,
            UpdateAnnouncementDto, UpdateCarouselDto,
        },
    },
    server::{
        error::AppError,
        util::{
            pagination::PageParams,
            parse::{parse_enum_param, search_term},
        },
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Carousel {
    pub id: i32,
    pub title: String,
    pub image_url: String,
    pub link_url: Option<String>,
    pub description: Option<String>,
    pub status: CarouselStatus,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Carousel {
    pub fn from_entity(entity: entity::carousel::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            image_url: entity.image_url,
            link_url: entity.link_url,
            description: entity.description,
            status: entity.status,
            sort_order: entity.sort_order,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> CarouselDto {
        CarouselDto {
            id: self.id,
            title: self.title,
            image_url: self.image_url,
            link_url: self.link_url,
            description: self.description,
            status: self.status,
            order: self.sort_order,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCarouselParam {
    pub title: String,
    pub image_url: String,
    pub link_url: Option<String>,
    pub description: Option<String>,
    pub sort_order: i32,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateCarouselParam {
    pub title: Option<String>,
    pub image_url: Option<String>,
    pub link_url: Option<String>,
    pub description: Option<String>,
    pub status: Option<CarouselStatus>,
    pub sort_order: Option<i32>,
}

#[derive(Debug, Clone, Default)]
pub struct CarouselListParam {
    pub page: PageParams,
    pub search: Option<String>,
    pub status: Option<CarouselStatus>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Announcement {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub status: AnnouncementStatus,
    pub published_at: Option<DateTime<Utc>>,
    pub author_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Announcement {
    pub fn from_entity(entity: entity::announcement::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            content: entity.content,
            status: entity.status,
            published_at: entity.published_at,
            author_id: entity.author_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> AnnouncementDto {
        AnnouncementDto {
            id: self.id,
            title: self.title,
            content: self.content,
            status: self.status,
            published_at: self.published_at,
            author_id: self.author_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateAnnouncementParam {
    pub title: String,
    pub content: String,
    pub author_id: i32,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateAnnouncementParam {
    pub title: Option<String>,
    pub content: Option<String>,
    pub status: Option<AnnouncementStatus>,
}

#[derive(Debug, Clone, Default)]
pub struct AnnouncementListParam {
    pub page: PageParams,
    pub search: Option<String>,
    pub status: Option<AnnouncementStatus>,
}

impl CreateCarouselParam {
    pub fn from_dto(dto: CreateCarouselDto) -> Self {
        Self {
            title: dto.title,
            image_url: dto.image_url,
            link_url: dto.link_url,
            description: dto.description,
            sort_order: dto.order.unwrap_or(1),
        }
    }
}

impl UpdateCarouselParam {
    pub fn from_dto(dto: UpdateCarouselDto) -> Self {
        Self {
            title: dto.title,
            image_url: dto.image_url,
            link_url: dto.link_url,
            description: dto.description,
            status: dto.status,
            sort_order: dto.order,
        }
    }
}

impl CarouselListParam {
    pub fn from_query(query: &ListQueryDto) -> Result<Self, AppError> {
        Ok(Self {
            page: PageParams::new(query.page, query.per_page),
            search: search_term(query.search.as_deref()),
            status: parse_enum_param("status", query.status.as_deref())?,
        })
    }
}

impl CreateAnnouncementParam {
    pub fn from_dto(author_id: i32, dto: CreateAnnouncementDto) -> Self {
        Self {
            title: dto.title,
            content: dto.content,
            author_id,
        }
    }
}

impl UpdateAnnouncementParam {
    pub fn from_dto(dto: UpdateAnnouncementDto) -> Self {
        Self {
            title: dto.title,
            content: dto.content,
            status: dto.status,
        }
    }
}

impl AnnouncementListParam {
    pub fn from_query(query: &ListQueryDto) -> Result<Self, AppError> {
        Ok(Self {
            page: PageParams::new(query.page, query.per_page),
            search: search_term(query.search.as_deref()),
            status: parse_enum_param("status", query.status.as_deref())?,
        })
    }
}
