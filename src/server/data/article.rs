//! Article data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::content::{
    Article, ArticleListParam, CreateArticleParam, UpdateArticleParam,
};
use crate::server::util::search::contains_ci;

pub struct ArticleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ArticleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Article>, DbErr> {
        let entity = entity::prelude::Article::find_by_id(id).one(self.db).await?;
        Ok(entity.map(Article::from_entity))
    }

    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<Article>, DbErr> {
        let entity = entity::prelude::Article::find()
            .filter(entity::article::Column::Slug.eq(slug))
            .one(self.db)
            .await?;
        Ok(entity.map(Article::from_entity))
    }

    /// Checks whether a slug is taken by an article other than `exclude_id`.
    pub async fn slug_exists(&self, slug: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query =
            entity::prelude::Article::find().filter(entity::article::Column::Slug.eq(slug));
        if let Some(id) = exclude_id {
            query = query.filter(entity::article::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Gets articles newest first, optionally filtered by status and title/summary search.
    pub async fn get_paginated(
        &self,
        param: &ArticleListParam,
    ) -> Result<(Vec<Article>, u64), DbErr> {
        let mut query = entity::prelude::Article::find();

        if let Some(search) = &param.search {
            query = query.filter(
                Condition::any()
                    .add(contains_ci(entity::article::Column::Title, search))
                    .add(contains_ci(entity::article::Column::Summary, search)),
            );
        }
        if let Some(status) = param.status {
            query = query.filter(entity::article::Column::Status.eq(status));
        }

        let paginator = query
            .order_by_desc(entity::article::Column::CreatedAt)
            .order_by_desc(entity::article::Column::Id)
            .paginate(self.db, param.page.per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(param.page.index()).await?;

        Ok((entities.into_iter().map(Article::from_entity).collect(), total))
    }

    /// Inserts an article under the already resolved `slug`; `param.slug` is ignored.
    pub async fn create(&self, slug: String, param: CreateArticleParam) -> Result<Article, DbErr> {
        let now = Utc::now();
        let entity = entity::article::ActiveModel {
            title: ActiveValue::Set(param.title),
            slug: ActiveValue::Set(slug),
            summary: ActiveValue::Set(param.summary),
            content: ActiveValue::Set(param.content),
            cover_url: ActiveValue::Set(param.cover_url),
            status: ActiveValue::Set(param.status),
            author_id: ActiveValue::Set(param.author_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Article::from_entity(entity))
    }

    pub async fn update(
        &self,
        id: i32,
        param: UpdateArticleParam,
    ) -> Result<Option<Article>, DbErr> {
        let Some(entity) = entity::prelude::Article::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        if let Some(title) = param.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(slug) = param.slug {
            active.slug = ActiveValue::Set(slug);
        }
        if let Some(summary) = param.summary {
            active.summary = ActiveValue::Set(Some(summary));
        }
        if let Some(content) = param.content {
            active.content = ActiveValue::Set(Some(content));
        }
        if let Some(cover_url) = param.cover_url {
            active.cover_url = ActiveValue::Set(Some(cover_url));
        }
        if let Some(status) = param.status {
            active.status = ActiveValue::Set(status);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;
        Ok(Some(Article::from_entity(entity)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Article::delete_by_id(id).exec(self.db).await?;
        Ok(result.rows_affected > 0)
    }
}
