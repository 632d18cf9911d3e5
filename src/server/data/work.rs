//! Work data repository.
//!
//! Counters (`views`, `likes`) are changed with single `UPDATE ... SET col = col ± 1`
//! statements so concurrent requests never lose increments.

use chrono::Utc;
use entity::sea_orm_active_enums::WorkStatus;
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::work::{
    CreateWorkParam, UpdateWorkParam, Work, WorkListParam, WorkReview, WorkSortField,
};
use crate::server::util::search::contains_ci;

pub struct WorkRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WorkRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a work with its author summary.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Work>, DbErr> {
        let row = entity::prelude::Work::find_by_id(id)
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        Ok(row.map(|(work, author)| Work::from_entity(work, author)))
    }

    /// Gets works with pagination, filters and sorting, each with its author.
    ///
    /// Search matches title or content as a substring.
    ///
    /// # Returns
    /// - `Ok((works, total))` - Works for the page and the total matching count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_paginated(&self, param: &WorkListParam) -> Result<(Vec<Work>, u64), DbErr> {
        let mut query = entity::prelude::Work::find();

        if let Some(search) = &param.search {
            query = query.filter(
                Condition::any()
                    .add(contains_ci(entity::work::Column::Title, search))
                    .add(contains_ci(entity::work::Column::Content, search)),
            );
        }
        if let Some(status) = param.status {
            query = query.filter(entity::work::Column::Status.eq(status));
        }
        if let Some(work_type) = param.work_type {
            query = query.filter(entity::work::Column::WorkType.eq(work_type));
        }
        if let Some(author_id) = param.author_id {
            query = query.filter(entity::work::Column::AuthorId.eq(author_id));
        }

        let column = match param.sort_by {
            WorkSortField::CreatedAt => entity::work::Column::CreatedAt,
            WorkSortField::Views => entity::work::Column::Views,
            WorkSortField::Likes => entity::work::Column::Likes,
            WorkSortField::Title => entity::work::Column::Title,
        };

        let paginator = query
            .order_by(column, param.sort_dir.order())
            .order_by(entity::work::Column::Id, param.sort_dir.order())
            .find_also_related(entity::prelude::User)
            .paginate(self.db, param.page.per_page);

        let total = paginator.num_items().await?;
        let rows = paginator.fetch_page(param.page.index()).await?;

        Ok((
            rows.into_iter()
                .map(|(work, author)| Work::from_entity(work, author))
                .collect(),
            total,
        ))
    }

    /// Inserts a work awaiting review.
    pub async fn create(&self, param: CreateWorkParam) -> Result<Work, DbErr> {
        let now = Utc::now();
        let entity = entity::work::ActiveModel {
            title: ActiveValue::Set(param.title),
            work_type: ActiveValue::Set(param.work_type),
            content: ActiveValue::Set(param.content),
            status: ActiveValue::Set(WorkStatus::Pending),
            author_id: ActiveValue::Set(param.author_id),
            views: ActiveValue::Set(0),
            likes: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Work::from_entity(entity, None))
    }

    pub async fn update(&self, id: i32, param: UpdateWorkParam) -> Result<Option<Work>, DbErr> {
        let Some(entity) = entity::prelude::Work::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        if let Some(title) = param.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(work_type) = param.work_type {
            active.work_type = ActiveValue::Set(work_type);
        }
        if let Some(content) = param.content {
            active.content = ActiveValue::Set(content);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;
        Ok(Some(Work::from_entity(entity, None)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Work::delete_by_id(id).exec(self.db).await?;
        Ok(result.rows_affected > 0)
    }

    /// Increments the view counter.
    ///
    /// # Returns
    /// - `Ok(true)` - Counter incremented
    /// - `Ok(false)` - No work with that id
    pub async fn increment_views(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Work::update_many()
            .col_expr(
                entity::work::Column::Views,
                Expr::col(entity::work::Column::Views).add(1),
            )
            .filter(entity::work::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Increments the like counter and returns the new value.
    pub async fn like(&self, id: i32) -> Result<Option<i32>, DbErr> {
        entity::prelude::Work::update_many()
            .col_expr(
                entity::work::Column::Likes,
                Expr::col(entity::work::Column::Likes).add(1),
            )
            .filter(entity::work::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        self.current_likes(id).await
    }

    /// Decrements the like counter, stopping at zero, and returns the new value.
    pub async fn unlike(&self, id: i32) -> Result<Option<i32>, DbErr> {
        entity::prelude::Work::update_many()
            .col_expr(
                entity::work::Column::Likes,
                Expr::col(entity::work::Column::Likes).sub(1),
            )
            .filter(entity::work::Column::Id.eq(id))
            .filter(entity::work::Column::Likes.gt(0))
            .exec(self.db)
            .await?;

        self.current_likes(id).await
    }

    /// Records a reviewer decision.
    pub async fn review(
        &self,
        id: i32,
        reviewer_id: i32,
        review: WorkReview,
    ) -> Result<Option<Work>, DbErr> {
        let Some(entity) = entity::prelude::Work::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let now = Utc::now();
        let mut active = entity.into_active_model();
        active.status = ActiveValue::Set(review.status());
        active.reviewed_by = ActiveValue::Set(Some(reviewer_id));
        active.reviewed_at = ActiveValue::Set(Some(now));
        match review {
            WorkReview::Approve { note } => active.review_note = ActiveValue::Set(note),
            WorkReview::Reject { reason } => active.reject_reason = ActiveValue::Set(reason),
        }
        active.updated_at = ActiveValue::Set(now);

        let entity = active.update(self.db).await?;
        Ok(Some(Work::from_entity(entity, None)))
    }

    async fn current_likes(&self, id: i32) -> Result<Option<i32>, DbErr> {
        let entity = entity::prelude::Work::find_by_id(id).one(self.db).await?;
        Ok(entity.map(|w| w.likes))
    }
}
