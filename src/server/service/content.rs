//! Articles, events and albums: public reads and editor CRUD.

use entity::sea_orm_active_enums::ArticleStatus;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        album::AlbumRepository, article::ArticleRepository, event::EventRepository,
        is_unique_violation,
    },
    error::AppError,
    model::content::{
        slugify, Album, Article, ArticleKey, ArticleListParam, CreateAlbumParam,
        CreateArticleParam, CreateEventParam, Event, EventListParam, UpdateAlbumParam,
        UpdateArticleParam, UpdateEventParam,
    },
    util::pagination::{Page, PageParams},
};

/// Attempts at `<slug>-2`, `<slug>-3`, ... before giving up on a generated slug.
const MAX_SLUG_SUFFIX: u32 = 50;

pub struct ArticleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ArticleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists published articles, newest first.
    pub async fn list_published(&self, page: PageParams) -> Result<Page<Article>, AppError> {
        self.list(&ArticleListParam {
            page,
            search: None,
            status: Some(ArticleStatus::Published),
        })
        .await
    }

    pub async fn list(&self, param: &ArticleListParam) -> Result<Page<Article>, AppError> {
        let (articles, total) = ArticleRepository::new(self.db).get_paginated(param).await?;

        Ok(Page::new(articles, total, param.page))
    }

    /// Gets a published article by numeric id or slug.
    pub async fn get_published(&self, key: ArticleKey) -> Result<Article, AppError> {
        let article_repo = ArticleRepository::new(self.db);
        let article = match key {
            ArticleKey::Id(id) => article_repo.find_by_id(id).await?,
            ArticleKey::Slug(slug) => article_repo.find_by_slug(&slug).await?,
        };

        article
            .filter(|a| a.status == ArticleStatus::Published)
            .ok_or_else(article_not_found)
    }

    /// Gets an article in any status.
    pub async fn get(&self, id: i32) -> Result<Article, AppError> {
        ArticleRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(article_not_found)
    }

    /// Creates an article.
    ///
    /// An explicit slug must be unused. Without one, a slug is derived from the
    /// title and suffixed with `-2`, `-3`, ... until it is free.
    ///
    /// # Returns
    /// - `Ok(Article)` - Created article
    /// - `Err(AppError::BadRequest)` - Explicit slug already taken
    pub async fn create(&self, param: CreateArticleParam) -> Result<Article, AppError> {
        let article_repo = ArticleRepository::new(self.db);

        let slug = match param.slug.as_deref().map(str::trim) {
            Some(slug) if !slug.is_empty() => {
                if article_repo.slug_exists(slug, None).await? {
                    return Err(slug_taken());
                }
                slug.to_string()
            }
            _ => self.free_slug(&slugify(&param.title)).await?,
        };

        article_repo.create(slug, param).await.map_err(|e| {
            if is_unique_violation(&e) {
                slug_taken()
            } else {
                e.into()
            }
        })
    }

    pub async fn update(&self, id: i32, param: UpdateArticleParam) -> Result<Article, AppError> {
        let article_repo = ArticleRepository::new(self.db);

        if let Some(slug) = &param.slug {
            if article_repo.slug_exists(slug, Some(id)).await? {
                return Err(slug_taken());
            }
        }

        article_repo
            .update(id, param)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    slug_taken()
                } else {
                    e.into()
                }
            })?
            .ok_or_else(article_not_found)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !ArticleRepository::new(self.db).delete(id).await? {
            return Err(article_not_found());
        }

        Ok(())
    }

    async fn free_slug(&self, base: &str) -> Result<String, AppError> {
        let article_repo = ArticleRepository::new(self.db);
        if !article_repo.slug_exists(base, None).await? {
            return Ok(base.to_string());
        }

        for suffix in 2..=MAX_SLUG_SUFFIX {
            let candidate = format!("{}-{}", base, suffix);
            if !article_repo.slug_exists(&candidate, None).await? {
                return Ok(candidate);
            }
        }

        Ok(format!("{}-{}", base, uuid::Uuid::new_v4().simple()))
    }
}

pub struct EventService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self, param: &EventListParam) -> Result<Page<Event>, AppError> {
        let (events, total) = EventRepository::new(self.db).get_paginated(param).await?;

        Ok(Page::new(events, total, param.page))
    }

    pub async fn get(&self, id: i32) -> Result<Event, AppError> {
        EventRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(event_not_found)
    }

    pub async fn create(&self, param: CreateEventParam) -> Result<Event, AppError> {
        Ok(EventRepository::new(self.db).create(param).await?)
    }

    pub async fn update(&self, id: i32, param: UpdateEventParam) -> Result<Event, AppError> {
        EventRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or_else(event_not_found)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !EventRepository::new(self.db).delete(id).await? {
            return Err(event_not_found());
        }

        Ok(())
    }
}

pub struct AlbumService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AlbumService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(
        &self,
        page: PageParams,
        search: Option<&str>,
    ) -> Result<Page<Album>, AppError> {
        let (albums, total) = AlbumRepository::new(self.db)
            .get_paginated(page, search)
            .await?;

        Ok(Page::new(albums, total, page))
    }

    pub async fn get(&self, id: i32) -> Result<Album, AppError> {
        AlbumRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(album_not_found)
    }

    pub async fn create(&self, param: CreateAlbumParam) -> Result<Album, AppError> {
        Ok(AlbumRepository::new(self.db).create(param).await?)
    }

    pub async fn update(&self, id: i32, param: UpdateAlbumParam) -> Result<Album, AppError> {
        AlbumRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or_else(album_not_found)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !AlbumRepository::new(self.db).delete(id).await? {
            return Err(album_not_found());
        }

        Ok(())
    }
}

fn article_not_found() -> AppError {
    AppError::NotFound("Article not found".to_string())
}

fn slug_taken() -> AppError {
    AppError::BadRequest("Slug already exists".to_string())
}

fn event_not_found() -> AppError {
    AppError::NotFound("Event not found".to_string())
}

fn album_not_found() -> AppError {
    AppError::NotFound("Album not found".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use test_utils::{
        builder::TestBuilder,
        factory::{article::ArticleFactory, event::EventFactory},
    };

    fn new_article(title: &str, slug: Option<&str>) -> CreateArticleParam {
        CreateArticleParam {
            title: title.to_string(),
            slug: slug.map(str::to_string),
            summary: None,
            content: Some("Body".to_string()),
            cover_url: None,
            status: ArticleStatus::Published,
            author_id: None,
        }
    }

    /// Tests generated slugs get numeric suffixes while explicit duplicates fail.
    ///
    /// Expected: "spring-reading", "spring-reading-2", then BadRequest
    #[tokio::test]
    async fn resolves_article_slugs() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .with_table(entity::prelude::Article)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let service = ArticleService::new(db);

        let first = service.create(new_article("Spring Reading", None)).await?;
        let second = service.create(new_article("Spring reading!", None)).await?;
        let duplicate = service
            .create(new_article("Another", Some("spring-reading")))
            .await;

        assert_eq!(first.slug, "spring-reading");
        assert_eq!(second.slug, "spring-reading-2");
        match duplicate {
            Err(AppError::BadRequest(msg)) => assert_eq!(msg, "Slug already exists"),
            other => panic!("expected BadRequest, got {:?}", other.map(|a| a.id)),
        }

        Ok(())
    }

    /// Tests drafts are hidden from public reads by id and by slug.
    ///
    /// Expected: published article found both ways; draft NotFound
    #[tokio::test]
    async fn hides_draft_articles() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .with_table(entity::prelude::Article)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let published = ArticleFactory::new(db).slug("open-mic").build().await?;
        let draft = ArticleFactory::new(db)
            .status(ArticleStatus::Draft)
            .build()
            .await?;
        let service = ArticleService::new(db);

        assert_eq!(
            service.get_published(ArticleKey::Id(published.id)).await?.id,
            published.id
        );
        assert_eq!(
            service
                .get_published(ArticleKey::parse("open-mic"))
                .await?
                .id,
            published.id
        );
        assert!(matches!(
            service.get_published(ArticleKey::Id(draft.id)).await,
            Err(AppError::NotFound(_))
        ));
        assert_eq!(service.list_published(PageParams::default()).await?.total, 1);
        assert_eq!(service.get(draft.id).await?.status, ArticleStatus::Draft);

        Ok(())
    }

    /// Tests events are ordered by start time with undated events last.
    ///
    /// Expected: later, earlier, undated
    #[tokio::test]
    async fn orders_events_by_start_time() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::Event)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let now = Utc::now();
        let undated = EventFactory::new(db).build().await?;
        let earlier = EventFactory::new(db)
            .start_at(now - Duration::days(3))
            .build()
            .await?;
        let later = EventFactory::new(db)
            .start_at(now + Duration::days(3))
            .build()
            .await?;

        let page = EventService::new(db).list(&EventListParam::default()).await?;

        assert_eq!(
            page.items.iter().map(|e| e.id).collect::<Vec<_>>(),
            vec![later.id, earlier.id, undated.id]
        );

        Ok(())
    }
}
