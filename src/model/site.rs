//! Carousels and announcements shown on the public site.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{AnnouncementStatus, CarouselStatus};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CarouselDto {
    pub id: i32,
    pub title: String,
    pub image_url: String,
    pub link_url: Option<String>,
    pub description: Option<String>,
    pub status: CarouselStatus,
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Deserialize, Debug, Validate)]
pub struct CreateCarouselDto {
    #[validate(length(min = 1, max = 200, message = "title must be 1-200 characters"))]
    pub title: String,
    #[validate(length(min = 1, message = "image_url is required"))]
    pub image_url: String,
    pub link_url: Option<String>,
    pub description: Option<String>,
    #[validate(range(min = 0, message = "order must not be negative"))]
    pub order: Option<i32>,
}

#[derive(Deserialize, Debug, Default, Validate)]
pub struct UpdateCarouselDto {
    #[validate(length(min = 1, max = 200, message = "title must be 1-200 characters"))]
    pub title: Option<String>,
    #[validate(length(min = 1, message = "image_url must not be empty"))]
    pub image_url: Option<String>,
    pub link_url: Option<String>,
    pub description: Option<String>,
    pub status: Option<CarouselStatus>,
    #[validate(range(min = 0, message = "order must not be negative"))]
    pub order: Option<i32>,
}

#[derive(Deserialize, Debug, Validate)]
pub struct UpdateCarouselOrderDto {
    #[validate(range(min = 1, message = "order must be at least 1"))]
    pub order: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AnnouncementDto {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub status: AnnouncementStatus,
    pub published_at: Option<DateTime<Utc>>,
    pub author_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Deserialize, Debug, Validate)]
pub struct CreateAnnouncementDto {
    #[validate(length(min = 1, max = 200, message = "title must be 1-200 characters"))]
    pub title: String,
    #[validate(length(min = 1, message = "content is required"))]
    pub content: String,
}

#[derive(Deserialize, Debug, Default, Validate)]
pub struct UpdateAnnouncementDto {
    #[validate(length(min = 1, max = 200, message = "title must be 1-200 characters"))]
    pub title: Option<String>,
    #[validate(length(min = 1, message = "content must not be empty"))]
    pub content: Option<String>,
    pub status: Option<AnnouncementStatus>,
}
