//! Activity data repository.
//!
//! Generic over the connection so registration can run every query on the
//! same transaction. All reads exclude soft-deleted rows; participant counts
//! are derived with a grouped `COUNT` over `activity_participants`.

use std::collections::HashMap;

use chrono::Utc;
use entity::sea_orm_active_enums::ActivityStatus;
use sea_orm::{
    sea_query::{Expr, JoinType},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait,
};

use crate::server::{
    model::activity::{
        Activity, ActivityListParam, ActivitySortField, CreateActivityParam, UpdateActivityParam,
    },
    util::{
        pagination::{PageParams, SortDir},
        search::contains_ci,
    },
};

pub struct ActivityRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ActivityRepository<'a, C> {
    /// Creates a new ActivityRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    ///
    /// # Returns
    /// - `ActivityRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a non-deleted activity with its participant count.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Activity>, DbErr> {
        let Some(entity) = entity::prelude::Activity::find_by_id(id)
            .filter(entity::activity::Column::DeletedAt.is_null())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let count = self.participant_count(entity.id).await?;
        Ok(Some(Activity::from_entity(entity, count)))
    }

    /// Loads a non-deleted activity with an exclusive row lock.
    ///
    /// Must be called on a transaction; the lock is held until commit or
    /// rollback. Backends without row locks (SQLite) rely on the database
    /// level write lock instead.
    pub async fn find_for_update(&self, id: i32) -> Result<Option<Activity>, DbErr> {
        let Some(entity) = entity::prelude::Activity::find_by_id(id)
            .filter(entity::activity::Column::DeletedAt.is_null())
            .lock_exclusive()
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let count = self.participant_count(entity.id).await?;
        Ok(Some(Activity::from_entity(entity, count)))
    }

    /// Gets activities with pagination, search, status filter and sorting.
    ///
    /// Search matches title or description as a substring.
    ///
    /// # Returns
    /// - `Ok((activities, total))` - Activities for the page and the total matching count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_paginated(
        &self,
        param: &ActivityListParam,
    ) -> Result<(Vec<Activity>, u64), DbErr> {
        let mut query = entity::prelude::Activity::find()
            .filter(entity::activity::Column::DeletedAt.is_null());

        if let Some(search) = &param.search {
            query = query.filter(
                Condition::any()
                    .add(contains_ci(entity::activity::Column::Title, search))
                    .add(contains_ci(entity::activity::Column::Description, search))
                    .add(contains_ci(entity::activity::Column::Location, search)),
            );
        }
        if let Some(status) = param.status {
            query = query.filter(entity::activity::Column::Status.eq(status));
        }

        let column = match param.sort_by {
            ActivitySortField::Date => entity::activity::Column::Date,
            ActivitySortField::CreatedAt => entity::activity::Column::CreatedAt,
            ActivitySortField::Title => entity::activity::Column::Title,
        };

        let paginator = query
            .order_by(column, param.sort_dir.order())
            .order_by(entity::activity::Column::Id, param.sort_dir.order())
            .paginate(self.db, param.page.per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(param.page.index()).await?;

        Ok((self.with_counts(entities).await?, total))
    }

    /// Gets the non-deleted activities a user is registered for, newest date first.
    pub async fn get_paginated_for_user(
        &self,
        user_id: i32,
        page: PageParams,
    ) -> Result<(Vec<Activity>, u64), DbErr> {
        let paginator = entity::prelude::Activity::find()
            .join(
                JoinType::InnerJoin,
                entity::activity::Relation::ActivityParticipant.def(),
            )
            .filter(entity::activity_participant::Column::UserId.eq(user_id))
            .filter(entity::activity::Column::DeletedAt.is_null())
            .order_by(entity::activity::Column::Date, SortDir::Desc.order())
            .order_by(entity::activity::Column::Id, SortDir::Desc.order())
            .paginate(self.db, page.per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page.index()).await?;

        Ok((self.with_counts(entities).await?, total))
    }

    pub async fn create(&self, param: CreateActivityParam) -> Result<Activity, DbErr> {
        let now = Utc::now();
        let entity = entity::activity::ActiveModel {
            title: ActiveValue::Set(param.title),
            description: ActiveValue::Set(param.description),
            image_url: ActiveValue::Set(param.image_url),
            date: ActiveValue::Set(param.date),
            time: ActiveValue::Set(param.time),
            location: ActiveValue::Set(param.location),
            instructor: ActiveValue::Set(param.instructor),
            status: ActiveValue::Set(ActivityStatus::Upcoming),
            max_participants: ActiveValue::Set(param.max_participants),
            deleted_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Activity::from_entity(entity, 0))
    }

    /// Applies a partial update to a non-deleted activity.
    ///
    /// # Returns
    /// - `Ok(Some(Activity))` - Updated activity
    /// - `Ok(None)` - Activity missing or soft-deleted
    pub async fn update(
        &self,
        id: i32,
        param: UpdateActivityParam,
    ) -> Result<Option<Activity>, DbErr> {
        let Some(entity) = self.find_entity(id).await? else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        if let Some(title) = param.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(description) = param.description {
            active.description = ActiveValue::Set(Some(description));
        }
        if let Some(image_url) = param.image_url {
            active.image_url = ActiveValue::Set(Some(image_url));
        }
        if let Some(date) = param.date {
            active.date = ActiveValue::Set(date);
        }
        if let Some(time) = param.time {
            active.time = ActiveValue::Set(Some(time));
        }
        if let Some(location) = param.location {
            active.location = ActiveValue::Set(Some(location));
        }
        if let Some(instructor) = param.instructor {
            active.instructor = ActiveValue::Set(Some(instructor));
        }
        if let Some(max_participants) = param.max_participants {
            active.max_participants = ActiveValue::Set(max_participants);
        }
        if let Some(status) = param.status {
            active.status = ActiveValue::Set(status);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;
        let count = self.participant_count(entity.id).await?;
        Ok(Some(Activity::from_entity(entity, count)))
    }

    pub async fn update_status(
        &self,
        id: i32,
        status: ActivityStatus,
    ) -> Result<Option<Activity>, DbErr> {
        self.update(
            id,
            UpdateActivityParam {
                status: Some(status),
                ..Default::default()
            },
        )
        .await
    }

    /// Marks an activity deleted.
    ///
    /// # Returns
    /// - `Ok(true)` - Activity was live and is now soft-deleted
    /// - `Ok(false)` - Activity missing or already deleted
    pub async fn soft_delete(&self, id: i32) -> Result<bool, DbErr> {
        let now = Utc::now();
        let result = entity::prelude::Activity::update_many()
            .filter(entity::activity::Column::Id.eq(id))
            .filter(entity::activity::Column::DeletedAt.is_null())
            .col_expr(entity::activity::Column::DeletedAt, Expr::value(now))
            .col_expr(entity::activity::Column::UpdatedAt, Expr::value(now))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Counts participants for each activity id in one grouped query.
    ///
    /// Activities without participants are absent from the map.
    pub async fn participant_counts(&self, ids: &[i32]) -> Result<HashMap<i32, u64>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows: Vec<(i32, i64)> = entity::prelude::ActivityParticipant::find()
            .select_only()
            .column(entity::activity_participant::Column::ActivityId)
            .column_as(
                entity::activity_participant::Column::Id.count(),
                "participant_count",
            )
            .filter(entity::activity_participant::Column::ActivityId.is_in(ids.to_vec()))
            .group_by(entity::activity_participant::Column::ActivityId)
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(id, count)| (id, count.max(0) as u64))
            .collect())
    }

    async fn participant_count(&self, id: i32) -> Result<u64, DbErr> {
        entity::prelude::ActivityParticipant::find()
            .filter(entity::activity_participant::Column::ActivityId.eq(id))
            .count(self.db)
            .await
    }

    async fn find_entity(&self, id: i32) -> Result<Option<entity::activity::Model>, DbErr> {
        entity::prelude::Activity::find_by_id(id)
            .filter(entity::activity::Column::DeletedAt.is_null())
            .one(self.db)
            .await
    }

    async fn with_counts(
        &self,
        entities: Vec<entity::activity::Model>,
    ) -> Result<Vec<Activity>, DbErr> {
        let ids: Vec<i32> = entities.iter().map(|a| a.id).collect();
        let counts = self.participant_counts(&ids).await?;

        Ok(entities
            .into_iter()
            .map(|entity| {
                let count = counts.get(&entity.id).copied().unwrap_or(0);
                Activity::from_entity(entity, count)
            })
            .collect())
    }
}
