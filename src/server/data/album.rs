//! Album data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    model::content::{Album, CreateAlbumParam, UpdateAlbumParam},
    util::{pagination::PageParams, search::contains_ci},
};

pub struct AlbumRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AlbumRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Album>, DbErr> {
        let entity = entity::prelude::Album::find_by_id(id).one(self.db).await?;
        Ok(entity.map(Album::from_entity))
    }

    /// Gets albums newest first, optionally filtered by a title substring.
    pub async fn get_paginated(
        &self,
        page: PageParams,
        search: Option<&str>,
    ) -> Result<(Vec<Album>, u64), DbErr> {
        let mut query = entity::prelude::Album::find();
        if let Some(search) = search {
            query = query.filter(contains_ci(entity::album::Column::Title, search));
        }

        let paginator = query
            .order_by_desc(entity::album::Column::CreatedAt)
            .order_by_desc(entity::album::Column::Id)
            .paginate(self.db, page.per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page.index()).await?;

        Ok((entities.into_iter().map(Album::from_entity).collect(), total))
    }

    pub async fn create(&self, param: CreateAlbumParam) -> Result<Album, DbErr> {
        let now = Utc::now();
        let entity = entity::album::ActiveModel {
            title: ActiveValue::Set(param.title),
            description: ActiveValue::Set(param.description),
            cover_url: ActiveValue::Set(param.cover_url),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Album::from_entity(entity))
    }

    pub async fn update(&self, id: i32, param: UpdateAlbumParam) -> Result<Option<Album>, DbErr> {
        let Some(entity) = entity::prelude::Album::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        if let Some(title) = param.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(description) = param.description {
            active.description = ActiveValue::Set(Some(description));
        }
        if let Some(cover_url) = param.cover_url {
            active.cover_url = ActiveValue::Set(Some(cover_url));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;
        Ok(Some(Album::from_entity(entity)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Album::delete_by_id(id).exec(self.db).await?;
        Ok(result.rows_affected > 0)
    }
}
