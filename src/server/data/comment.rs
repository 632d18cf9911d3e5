//! Comment data repository. Soft-deleted comments are invisible to every query here.

use chrono::Utc;
use entity::sea_orm_active_enums::CommentStatus;
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::comment::{Comment, CommentListParam};
use crate::server::util::search::contains_ci;

pub struct CommentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Comment>, DbErr> {
        let entity = self.find_entity(id).await?;
        Ok(entity.map(|c| Comment::from_entity(c, None)))
    }

    /// Gets comments with pagination and filters, each with its author, ordered by creation time.
    pub async fn get_paginated(
        &self,
        param: &CommentListParam,
    ) -> Result<(Vec<Comment>, u64), DbErr> {
        let mut query = entity::prelude::Comment::find()
            .filter(entity::comment::Column::DeletedAt.is_null());

        if let Some(work_id) = param.work_id {
            query = query.filter(entity::comment::Column::WorkId.eq(work_id));
        }
        if let Some(search) = &param.search {
            query = query.filter(contains_ci(entity::comment::Column::Content, search));
        }
        if let Some(status) = param.status {
            query = query.filter(entity::comment::Column::Status.eq(status));
        }

        let paginator = query
            .order_by(entity::comment::Column::CreatedAt, param.sort_dir.order())
            .order_by(entity::comment::Column::Id, param.sort_dir.order())
            .find_also_related(entity::prelude::User)
            .paginate(self.db, param.page.per_page);

        let total = paginator.num_items().await?;
        let rows = paginator.fetch_page(param.page.index()).await?;

        Ok((
            rows.into_iter()
                .map(|(comment, author)| Comment::from_entity(comment, author))
                .collect(),
            total,
        ))
    }

    /// Inserts a comment awaiting review.
    pub async fn create(
        &self,
        author_id: i32,
        work_id: i32,
        content: String,
    ) -> Result<Comment, DbErr> {
        let now = Utc::now();
        let entity = entity::comment::ActiveModel {
            content: ActiveValue::Set(content),
            status: ActiveValue::Set(CommentStatus::Pending),
            author_id: ActiveValue::Set(author_id),
            work_id: ActiveValue::Set(work_id),
            likes: ActiveValue::Set(0),
            replies: ActiveValue::Set(0),
            deleted_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Comment::from_entity(entity, None))
    }

    pub async fn update_content(
        &self,
        id: i32,
        content: String,
    ) -> Result<Option<Comment>, DbErr> {
        let Some(entity) = self.find_entity(id).await? else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.content = ActiveValue::Set(content);
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;
        Ok(Some(Comment::from_entity(entity, None)))
    }

    /// Sets a new status and records the reviewer.
    pub async fn review(
        &self,
        id: i32,
        reviewer_id: i32,
        status: CommentStatus,
    ) -> Result<Option<Comment>, DbErr> {
        let Some(entity) = self.find_entity(id).await? else {
            return Ok(None);
        };

        let now = Utc::now();
        let mut active = entity.into_active_model();
        active.status = ActiveValue::Set(status);
        active.reviewed_by = ActiveValue::Set(Some(reviewer_id));
        active.reviewed_at = ActiveValue::Set(Some(now));
        active.updated_at = ActiveValue::Set(now);

        let entity = active.update(self.db).await?;
        Ok(Some(Comment::from_entity(entity, None)))
    }

    /// Marks a comment deleted.
    ///
    /// # Returns
    /// - `Ok(true)` - Comment was live and is now soft-deleted
    /// - `Ok(false)` - Comment missing or already deleted
    pub async fn soft_delete(&self, id: i32) -> Result<bool, DbErr> {
        let now = Utc::now();
        let result = entity::prelude::Comment::update_many()
            .filter(entity::comment::Column::Id.eq(id))
            .filter(entity::comment::Column::DeletedAt.is_null())
            .col_expr(entity::comment::Column::DeletedAt, Expr::value(now))
            .col_expr(entity::comment::Column::UpdatedAt, Expr::value(now))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Increments the like counter and returns the new value.
    pub async fn like(&self, id: i32) -> Result<Option<i32>, DbErr> {
        entity::prelude::Comment::update_many()
            .col_expr(
                entity::comment::Column::Likes,
                Expr::col(entity::comment::Column::Likes).add(1),
            )
            .filter(entity::comment::Column::Id.eq(id))
            .filter(entity::comment::Column::DeletedAt.is_null())
            .exec(self.db)
            .await?;

        Ok(self.find_entity(id).await?.map(|c| c.likes))
    }

    async fn find_entity(&self, id: i32) -> Result<Option<entity::comment::Model>, DbErr> {
        entity::prelude::Comment::find_by_id(id)
            .filter(entity::comment::Column::DeletedAt.is_null())
            .one(self.db)
            .await
    }
}
