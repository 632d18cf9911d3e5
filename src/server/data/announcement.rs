//! Announcement data repository.

use chrono::Utc;
use entity::sea_orm_active_enums::AnnouncementStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    model::site::{
        Announcement, AnnouncementListParam, CreateAnnouncementParam, UpdateAnnouncementParam,
    },
    util::{pagination::PageParams, search::contains_ci},
};

pub struct AnnouncementRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AnnouncementRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets published announcements, most recently published first.
    pub async fn get_published(
        &self,
        page: PageParams,
    ) -> Result<(Vec<Announcement>, u64), DbErr> {
        let paginator = entity::prelude::Announcement::find()
            .filter(entity::announcement::Column::Status.eq(AnnouncementStatus::Published))
            .order_by_desc(entity::announcement::Column::PublishedAt)
            .order_by_desc(entity::announcement::Column::Id)
            .paginate(self.db, page.per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page.index()).await?;

        Ok((entities.into_iter().map(Announcement::from_entity).collect(), total))
    }

    pub async fn get_paginated(
        &self,
        param: &AnnouncementListParam,
    ) -> Result<(Vec<Announcement>, u64), DbErr> {
        let mut query = entity::prelude::Announcement::find();

        if let Some(search) = &param.search {
            query = query.filter(contains_ci(entity::announcement::Column::Title, search));
        }
        if let Some(status) = param.status {
            query = query.filter(entity::announcement::Column::Status.eq(status));
        }

        let paginator = query
            .order_by_desc(entity::announcement::Column::CreatedAt)
            .order_by_desc(entity::announcement::Column::Id)
            .paginate(self.db, param.page.per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(param.page.index()).await?;

        Ok((entities.into_iter().map(Announcement::from_entity).collect(), total))
    }

    /// Inserts a draft announcement.
    pub async fn create(&self, param: CreateAnnouncementParam) -> Result<Announcement, DbErr> {
        let now = Utc::now();
        let entity = entity::announcement::ActiveModel {
            title: ActiveValue::Set(param.title),
            content: ActiveValue::Set(param.content),
            status: ActiveValue::Set(AnnouncementStatus::Draft),
            published_at: ActiveValue::Set(None),
            author_id: ActiveValue::Set(param.author_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Announcement::from_entity(entity))
    }

    pub async fn update(
        &self,
        id: i32,
        param: UpdateAnnouncementParam,
    ) -> Result<Option<Announcement>, DbErr> {
        let Some(entity) = entity::prelude::Announcement::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let now = Utc::now();
        let first_publish =
            param.status == Some(AnnouncementStatus::Published) && entity.published_at.is_none();

        let mut active = entity.into_active_model();
        if let Some(title) = param.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(content) = param.content {
            active.content = ActiveValue::Set(content);
        }
        if let Some(status) = param.status {
            active.status = ActiveValue::Set(status);
        }
        if first_publish {
            active.published_at = ActiveValue::Set(Some(now));
        }
        active.updated_at = ActiveValue::Set(now);

        let entity = active.update(self.db).await?;
        Ok(Some(Announcement::from_entity(entity)))
    }

    /// Publishes an announcement, stamping `published_at` with the current time.
    pub async fn publish(&self, id: i32) -> Result<Option<Announcement>, DbErr> {
        let Some(entity) = entity::prelude::Announcement::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let now = Utc::now();
        let mut active = entity.into_active_model();
        active.status = ActiveValue::Set(AnnouncementStatus::Published);
        active.published_at = ActiveValue::Set(Some(now));
        active.updated_at = ActiveValue::Set(now);

        let entity = active.update(self.db).await?;
        Ok(Some(Announcement::from_entity(entity)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Announcement::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }
}
