//! Event data repository.

use chrono::Utc;
use sea_orm::{
    sea_query::{NullOrdering, Order},
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::content::{CreateEventParam, Event, EventListParam, UpdateEventParam};
use crate::server::util::search::contains_ci;

pub struct EventRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Event>, DbErr> {
        let entity = entity::prelude::Event::find_by_id(id).one(self.db).await?;
        Ok(entity.map(Event::from_entity))
    }

    /// Gets events ordered by start time, latest first, undated events last.
    pub async fn get_paginated(&self, param: &EventListParam) -> Result<(Vec<Event>, u64), DbErr> {
        let mut query = entity::prelude::Event::find();

        if let Some(search) = &param.search {
            query = query.filter(contains_ci(entity::event::Column::Title, search));
        }
        if let Some(status) = param.status {
            query = query.filter(entity::event::Column::Status.eq(status));
        }

        let paginator = query
            .order_by_with_nulls(entity::event::Column::StartAt, Order::Desc, NullOrdering::Last)
            .order_by_desc(entity::event::Column::Id)
            .paginate(self.db, param.page.per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(param.page.index()).await?;

        Ok((entities.into_iter().map(Event::from_entity).collect(), total))
    }

    pub async fn create(&self, param: CreateEventParam) -> Result<Event, DbErr> {
        let now = Utc::now();
        let entity = entity::event::ActiveModel {
            title: ActiveValue::Set(param.title),
            description: ActiveValue::Set(param.description),
            banner_url: ActiveValue::Set(param.banner_url),
            start_at: ActiveValue::Set(param.start_at),
            end_at: ActiveValue::Set(param.end_at),
            location: ActiveValue::Set(param.location),
            status: ActiveValue::Set(param.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Event::from_entity(entity))
    }

    pub async fn update(&self, id: i32, param: UpdateEventParam) -> Result<Option<Event>, DbErr> {
        let Some(entity) = entity::prelude::Event::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        if let Some(title) = param.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(description) = param.description {
            active.description = ActiveValue::Set(Some(description));
        }
        if let Some(banner_url) = param.banner_url {
            active.banner_url = ActiveValue::Set(Some(banner_url));
        }
        if let Some(start_at) = param.start_at {
            active.start_at = ActiveValue::Set(Some(start_at));
        }
        if let Some(end_at) = param.end_at {
            active.end_at = ActiveValue::Set(Some(end_at));
        }
        if let Some(location) = param.location {
            active.location = ActiveValue::Set(Some(location));
        }
        if let Some(status) = param.status {
            active.status = ActiveValue::Set(status);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;
        Ok(Some(Event::from_entity(entity)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Event::delete_by_id(id).exec(self.db).await?;
        Ok(result.rows_affected > 0)
    }
}
