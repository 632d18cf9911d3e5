//! Aggregate queries backing the statistics endpoints.
//!
//! Soft-deleted comments and activities are excluded from every count.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{
    ActivityStatus, CommentStatus, UserStatus, WorkStatus, WorkType,
};
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QuerySelect, QueryTrait, RelationTrait, sea_query::JoinType,
};

use crate::server::model::stats::Period;

pub struct StatsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatsRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn count_users(&self, period: Option<Period>) -> Result<u64, DbErr> {
        let mut query = entity::prelude::User::find();
        if let Some(period) = period {
            query = query.filter(within(entity::user::Column::CreatedAt, period));
        }

        query.count(self.db).await
    }

    pub async fn count_users_since(&self, since: DateTime<Utc>) -> Result<u64, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::CreatedAt.gte(since))
            .count(self.db)
            .await
    }

    pub async fn count_users_by_status(&self, status: UserStatus) -> Result<u64, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Status.eq(status))
            .count(self.db)
            .await
    }

    /// Users who logged in or published a work during `period`.
    pub async fn count_active_users(&self, period: Period) -> Result<u64, DbErr> {
        let authors = entity::prelude::Work::find()
            .select_only()
            .column(entity::work::Column::AuthorId)
            .filter(within(entity::work::Column::CreatedAt, period))
            .into_query();

        entity::prelude::User::find()
            .filter(
                Condition::any()
                    .add(within(entity::user::Column::LastLoginAt, period))
                    .add(entity::user::Column::Id.in_subquery(authors)),
            )
            .count(self.db)
            .await
    }

    pub async fn count_works(
        &self,
        period: Option<Period>,
        status: Option<WorkStatus>,
    ) -> Result<u64, DbErr> {
        let mut query = entity::prelude::Work::find();
        if let Some(period) = period {
            query = query.filter(within(entity::work::Column::CreatedAt, period));
        }
        if let Some(status) = status {
            query = query.filter(entity::work::Column::Status.eq(status));
        }

        query.count(self.db).await
    }

    /// Approved work counts grouped by type. Types without works are absent.
    pub async fn count_approved_works_by_type(&self) -> Result<Vec<(WorkType, i64)>, DbErr> {
        entity::prelude::Work::find()
            .select_only()
            .column(entity::work::Column::WorkType)
            .column_as(entity::work::Column::Id.count(), "count")
            .filter(entity::work::Column::Status.eq(WorkStatus::Approved))
            .group_by(entity::work::Column::WorkType)
            .into_tuple::<(WorkType, i64)>()
            .all(self.db)
            .await
    }

    /// Sum of `views` over works created in `period`, or over all works.
    pub async fn sum_work_views(&self, period: Option<Period>) -> Result<i64, DbErr> {
        self.sum_work_column(entity::work::Column::Views, period).await
    }

    pub async fn sum_work_likes(&self) -> Result<i64, DbErr> {
        self.sum_work_column(entity::work::Column::Likes, None).await
    }

    async fn sum_work_column(
        &self,
        column: entity::work::Column,
        period: Option<Period>,
    ) -> Result<i64, DbErr> {
        let mut query = entity::prelude::Work::find()
            .select_only()
            .column_as(column.sum(), "total");
        if let Some(period) = period {
            query = query.filter(within(entity::work::Column::CreatedAt, period));
        }

        let total = query.into_tuple::<Option<i64>>().one(self.db).await?;

        Ok(total.flatten().unwrap_or(0))
    }

    pub async fn count_comments(
        &self,
        period: Option<Period>,
        status: Option<CommentStatus>,
    ) -> Result<u64, DbErr> {
        let mut query = entity::prelude::Comment::find()
            .filter(entity::comment::Column::DeletedAt.is_null());
        if let Some(period) = period {
            query = query.filter(within(entity::comment::Column::CreatedAt, period));
        }
        if let Some(status) = status {
            query = query.filter(entity::comment::Column::Status.eq(status));
        }

        query.count(self.db).await
    }

    /// Counts activities, restricted to `statuses` unless empty.
    pub async fn count_activities(
        &self,
        period: Option<Period>,
        statuses: &[ActivityStatus],
    ) -> Result<u64, DbErr> {
        let mut query = entity::prelude::Activity::find()
            .filter(entity::activity::Column::DeletedAt.is_null());
        if let Some(period) = period {
            query = query.filter(within(entity::activity::Column::CreatedAt, period));
        }
        if !statuses.is_empty() {
            query = query.filter(entity::activity::Column::Status.is_in(statuses.iter().copied()));
        }

        query.count(self.db).await
    }

    /// Registrations across activities that are not deleted.
    pub async fn count_participants(&self) -> Result<u64, DbErr> {
        entity::prelude::ActivityParticipant::find()
            .join(
                JoinType::InnerJoin,
                entity::activity_participant::Relation::Activity.def(),
            )
            .filter(entity::activity::Column::DeletedAt.is_null())
            .count(self.db)
            .await
    }

    /// Distinct users registered for at least one activity.
    pub async fn count_participating_users(&self) -> Result<u64, DbErr> {
        entity::prelude::ActivityParticipant::find()
            .select_only()
            .column(entity::activity_participant::Column::UserId)
            .distinct()
            .count(self.db)
            .await
    }
}

fn within<C: ColumnTrait>(column: C, period: Period) -> Condition {
    Condition::all()
        .add(column.gte(period.start))
        .add(column.lt(period.end))
}
