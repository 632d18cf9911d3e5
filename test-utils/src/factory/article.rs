//! Article factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::sea_orm_active_enums::ArticleStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct ArticleFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    slug: String,
    status: ArticleStatus,
    author_id: Option<i32>,
}

impl<'a> ArticleFactory<'a> {
    /// Defaults to a published article with slug `article-{id}`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Article {}", id),
            slug: format!("article-{}", id),
            status: ArticleStatus::Published,
            author_id: None,
        }
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn status(mut self, status: ArticleStatus) -> Self {
        self.status = status;
        self
    }

    pub fn author_id(mut self, author_id: i32) -> Self {
        self.author_id = Some(author_id);
        self
    }

    pub async fn build(self) -> Result<entity::article::Model, DbErr> {
        let now = Utc::now();
        entity::article::ActiveModel {
            title: ActiveValue::Set(self.title),
            slug: ActiveValue::Set(self.slug),
            content: ActiveValue::Set(Some("Body".to_string())),
            status: ActiveValue::Set(self.status),
            author_id: ActiveValue::Set(self.author_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_article(db: &DatabaseConnection) -> Result<entity::article::Model, DbErr> {
    ArticleFactory::new(db).build().await
}
