//! Article, event and album domain models.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{ArticleStatus, EventStatus};

use crate::{
    model::{
        api::ListQueryDto,
        content::{
            AlbumDto, ArticleDto, CreateAlbumDto, CreateArticleDto, CreateEventDto, EventDto,
            UpdateAlbumDto, UpdateArticleDto, UpdateEventDto,
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
pub struct Article {
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

impl Article {
    pub fn from_entity(entity: entity::article::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            slug: entity.slug,
            summary: entity.summary,
            content: entity.content,
            cover_url: entity.cover_url,
            status: entity.status,
            author_id: entity.author_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> ArticleDto {
        ArticleDto {
            id: self.id,
            title: self.title,
            slug: self.slug,
            summary: self.summary,
            content: self.content,
            cover_url: self.cover_url,
            status: self.status,
            author_id: self.author_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Article insert. A missing `slug` is derived from the title.
#[derive(Debug, Clone)]
pub struct CreateArticleParam {
    pub title: String,
    pub slug: Option<String>,
    pub summary: Option<String>,
    pub content: Option<String>,
    pub cover_url: Option<String>,
    pub status: ArticleStatus,
    pub author_id: Option<i32>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateArticleParam {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub summary: Option<String>,
    pub content: Option<String>,
    pub cover_url: Option<String>,
    pub status: Option<ArticleStatus>,
}

#[derive(Debug, Clone, Default)]
pub struct ArticleListParam {
    pub page: PageParams,
    pub search: Option<String>,
    pub status: Option<ArticleStatus>,
}

/// Public article lookup key: `/articles/42` or `/articles/spring-reading`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleKey {
    Id(i32),
    Slug(String),
}

impl ArticleKey {
    pub fn parse(raw: &str) -> Self {
        match raw.parse::<i32>() {
            Ok(id) => Self::Id(id),
            Err(_) => Self::Slug(raw.to_string()),
        }
    }
}

/// Derives a URL slug from a title.
///
/// Letters and digits (any script) are lowercased and kept; every other run of
/// characters becomes a single `-`.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;

    for c in title.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(c.to_lowercase());
        } else {
            pending_dash = true;
        }
    }

    if slug.is_empty() {
        "article".to_string()
    } else {
        slug
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
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

impl Event {
    pub fn from_entity(entity: entity::event::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            banner_url: entity.banner_url,
            start_at: entity.start_at,
            end_at: entity.end_at,
            location: entity.location,
            status: entity.status,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> EventDto {
        EventDto {
            id: self.id,
            title: self.title,
            description: self.description,
            banner_url: self.banner_url,
            start_at: self.start_at,
            end_at: self.end_at,
            location: self.location,
            status: self.status,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateEventParam {
    pub title: String,
    pub description: Option<String>,
    pub banner_url: Option<String>,
    pub start_at: Option<DateTime<Utc>>,
    pub end_at: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub status: EventStatus,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateEventParam {
    pub title: Option<String>,
    pub description: Option<String>,
    pub banner_url: Option<String>,
    pub start_at: Option<DateTime<Utc>>,
    pub end_at: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub status: Option<EventStatus>,
}

#[derive(Debug, Clone, Default)]
pub struct EventListParam {
    pub page: PageParams,
    pub search: Option<String>,
    pub status: Option<EventStatus>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Album {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub cover_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Album {
    pub fn from_entity(entity: entity::album::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            cover_url: entity.cover_url,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> AlbumDto {
        AlbumDto {
            id: self.id,
            title: self.title,
            description: self.description,
            cover_url: self.cover_url,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateAlbumParam {
    pub title: String,
    pub description: Option<String>,
    pub cover_url: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateAlbumParam {
    pub title: Option<String>,
    pub description: Option<String>,
    pub cover_url: Option<String>,
}

impl CreateArticleParam {
    /// Articles are drafts unless the editor publishes them directly.
    pub fn from_dto(author_id: i32, dto: CreateArticleDto) -> Self {
        Self {
            title: dto.title,
            slug: dto.slug,
            summary: dto.summary,
            content: dto.content,
            cover_url: dto.cover_url,
            status: dto.status.unwrap_or(ArticleStatus::Draft),
            author_id: Some(author_id),
        }
    }
}

impl UpdateArticleParam {
    pub fn from_dto(dto: UpdateArticleDto) -> Self {
        Self {
            title: dto.title,
            slug: dto.slug,
            summary: dto.summary,
            content: dto.content,
            cover_url: dto.cover_url,
            status: dto.status,
        }
    }
}

impl ArticleListParam {
    pub fn from_query(query: &ListQueryDto) -> Result<Self, AppError> {
        Ok(Self {
            page: PageParams::new(query.page, query.per_page),
            search: search_term(query.search.as_deref()),
            status: parse_enum_param("status", query.status.as_deref())?,
        })
    }
}

impl CreateEventParam {
    pub fn from_dto(dto: CreateEventDto) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
            banner_url: dto.banner_url,
            start_at: dto.start_at,
            end_at: dto.end_at,
            location: dto.location,
            status: dto.status.unwrap_or(EventStatus::Planned),
        }
    }
}

impl UpdateEventParam {
    pub fn from_dto(dto: UpdateEventDto) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
            banner_url: dto.banner_url,
            start_at: dto.start_at,
            end_at: dto.end_at,
            location: dto.location,
            status: dto.status,
        }
    }
}

impl EventListParam {
    pub fn from_query(query: &ListQueryDto) -> Result<Self, AppError> {
        Ok(Self {
            page: PageParams::new(query.page, query.per_page),
            search: search_term(query.search.as_deref()),
            status: parse_enum_param("status", query.status.as_deref())?,
        })
    }
}

impl CreateAlbumParam {
    pub fn from_dto(dto: CreateAlbumDto) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
            cover_url: dto.cover_url,
        }
    }
}

impl UpdateAlbumParam {
    pub fn from_dto(dto: UpdateAlbumDto) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
            cover_url: dto.cover_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugifies_titles() {
        assert_eq!(slugify("Spring Reading: Night & Day!"), "spring-reading-night-day");
        assert_eq!(slugify("  --Leading dashes"), "leading-dashes");
        assert_eq!(slugify("麦芒 诗社"), "麦芒-诗社");
        assert_eq!(slugify("!!!"), "article");
    }

    #[test]
    fn parses_article_keys() {
        assert_eq!(ArticleKey::parse("42"), ArticleKey::Id(42));
        assert_eq!(
            ArticleKey::parse("spring-reading"),
            ArticleKey::Slug("spring-reading".to_string())
        );
    }
}
