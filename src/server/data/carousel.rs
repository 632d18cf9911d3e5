//! Carousel data repository.

use chrono::Utc;
use entity::sea_orm_active_enums::CarouselStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::site::{
    Carousel, CarouselListParam, CreateCarouselParam, UpdateCarouselParam,
};
use crate::server::util::search::contains_ci;

pub struct CarouselRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CarouselRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets active carousels by display order, newest first within the same order.
    pub async fn get_active(&self) -> Result<Vec<Carousel>, DbErr> {
        let entities = entity::prelude::Carousel::find()
            .filter(entity::carousel::Column::Status.eq(CarouselStatus::Active))
            .order_by_asc(entity::carousel::Column::SortOrder)
            .order_by_desc(entity::carousel::Column::CreatedAt)
            .order_by_desc(entity::carousel::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Carousel::from_entity).collect())
    }

    pub async fn get_paginated(
        &self,
        param: &CarouselListParam,
    ) -> Result<(Vec<Carousel>, u64), DbErr> {
        let mut query = entity::prelude::Carousel::find();

        if let Some(search) = &param.search {
            query = query.filter(contains_ci(entity::carousel::Column::Title, search));
        }
        if let Some(status) = param.status {
            query = query.filter(entity::carousel::Column::Status.eq(status));
        }

        let paginator = query
            .order_by_asc(entity::carousel::Column::SortOrder)
            .order_by_desc(entity::carousel::Column::CreatedAt)
            .order_by_desc(entity::carousel::Column::Id)
            .paginate(self.db, param.page.per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(param.page.index()).await?;

        Ok((entities.into_iter().map(Carousel::from_entity).collect(), total))
    }

    /// Inserts an active carousel.
    pub async fn create(&self, param: CreateCarouselParam) -> Result<Carousel, DbErr> {
        let now = Utc::now();
        let entity = entity::carousel::ActiveModel {
            title: ActiveValue::Set(param.title),
            image_url: ActiveValue::Set(param.image_url),
            link_url: ActiveValue::Set(param.link_url),
            description: ActiveValue::Set(param.description),
            status: ActiveValue::Set(CarouselStatus::Active),
            sort_order: ActiveValue::Set(param.sort_order),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Carousel::from_entity(entity))
    }

    pub async fn update(
        &self,
        id: i32,
        param: UpdateCarouselParam,
    ) -> Result<Option<Carousel>, DbErr> {
        let Some(entity) = entity::prelude::Carousel::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        if let Some(title) = param.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(image_url) = param.image_url {
            active.image_url = ActiveValue::Set(image_url);
        }
        if let Some(link_url) = param.link_url {
            active.link_url = ActiveValue::Set(Some(link_url));
        }
        if let Some(description) = param.description {
            active.description = ActiveValue::Set(Some(description));
        }
        if let Some(status) = param.status {
            active.status = ActiveValue::Set(status);
        }
        if let Some(sort_order) = param.sort_order {
            active.sort_order = ActiveValue::Set(sort_order);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;
        Ok(Some(Carousel::from_entity(entity)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Carousel::delete_by_id(id).exec(self.db).await?;
        Ok(result.rows_affected > 0)
    }
}
