//! Articles, events and albums.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{ArticleStatus, EventStatus};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ArticleDto {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub summary: Option<String>,
    pub content: Option<String>,
    pub cover_url: Option<String>,
    pub status: ArticleStatus,
    pub author_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Deserialize, Debug, Validate)]
pub struct CreateArticleDto {
    #[validate(length(min = 1, max = 200, message = "title must be 1-200 characters"))]
    pub title: String,
    #[validate(length(min = 1, max = 200, message = "slug must be 1-200 characters"))]
    pub slug: Option<String>,
    pub summary: Option<String>,
    pub content: Option<String>,
    pub cover_url: Option<String>,
    pub status: Option<ArticleStatus>,
}

#[derive(Deserialize, Debug, Default, Validate)]
pub struct UpdateArticleDto {
    #[validate(length(min = 1, max = 200, message = "title must be 1-200 characters"))]
    pub title: Option<String>,
    #[validate(length(min = 1, max = 200, message = "slug must be 1-200 characters"))]
    pub slug: Option<String>,
    pub summary: Option<String>,
    pub content: Option<String>,
    pub cover_url: Option<String>,
    pub status: Option<ArticleStatus>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct EventDto {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub banner_url: Option<String>,
    pub start_at: Option<DateTime<Utc>>,
    pub end_at: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub status: EventStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Deserialize, Debug, Validate)]
pub struct CreateEventDto {
    #[validate(length(min = 1, max = 200, message = "title must be 1-200 characters"))]
    pub title: String,
    pub description: Option<String>,
    pub banner_url: Option<String>,
    pub start_at: Option<DateTime<Utc>>,
    pub end_at: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub status: Option<EventStatus>,
}

#[derive(Deserialize, Debug, Default, Validate)]
pub struct UpdateEventDto {
    #[validate(length(min = 1, max = 200, message = "title must be 1-200 characters"))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub banner_url: Option<String>,
    pub start_at: Option<DateTime<Utc>>,
    pub end_at: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub status: Option<EventStatus>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AlbumDto {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub cover_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Deserialize, Debug, Validate)]
pub struct CreateAlbumDto {
    #[validate(length(min = 1, max = 200, message = "title must be 1-200 characters"))]
    pub title: String,
    pub description: Option<String>,
    pub cover_url: Option<String>,
}

#[derive(Deserialize, Debug, Default, Validate)]
pub struct UpdateAlbumDto {
    #[validate(length(min = 1, max = 200, message = "title must be 1-200 characters"))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub cover_url: Option<String>,
}
