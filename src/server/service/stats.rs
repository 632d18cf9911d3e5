//! Site statistics for the public footer and the admin console.

use chrono::{TimeDelta, Utc};
use entity::sea_orm_active_enums::{
    ActivityStatus, CommentStatus, UserStatus, WorkStatus, WorkType,
};
use sea_orm::{DatabaseConnection, Iterable};

use crate::{
    model::stats::{
        ActivityStatsDto, ContentTrendDto, DashboardDto, MetricDto, MonthlyStatsDto,
        OverviewDto, ParticipationDto, PublicSummaryDto, UserGrowthPointDto, UserStatsDto,
        WorkStatsDto,
    },
    server::{
        data::stats::StatsRepository,
        error::AppError,
        model::stats::{percentage, recent_months, MonthlyMetric, Period},
    },
};

/// Months covered by the growth and monthly series.
const SERIES_MONTHS: usize = 6;

pub struct StatsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn public_summary(&self) -> Result<PublicSummaryDto, AppError> {
        let stats_repo = StatsRepository::new(self.db);

        Ok(PublicSummaryDto {
            total_users: stats_repo.count_users(None).await?,
            total_works: stats_repo.count_works(None, None).await?,
            total_views: stats_repo.sum_work_views(None).await?,
            total_comments: stats_repo.count_comments(None, None).await?,
        })
    }

    pub async fn dashboard(&self) -> Result<DashboardDto, AppError> {
        let stats_repo = StatsRepository::new(self.db);

        Ok(DashboardDto {
            total_users: stats_repo.count_users(None).await?,
            total_works: stats_repo.count_works(None, None).await?,
            pending_works: stats_repo
                .count_works(None, Some(WorkStatus::Pending))
                .await?,
            total_activities: stats_repo.count_activities(None, &[]).await?,
            active_activities: stats_repo
                .count_activities(None, &[ActivityStatus::Upcoming, ActivityStatus::Ongoing])
                .await?,
            total_comments: stats_repo.count_comments(None, None).await?,
            pending_comments: stats_repo
                .count_comments(None, Some(CommentStatus::Pending))
                .await?,
        })
    }

    pub async fn user_stats(&self) -> Result<UserStatsDto, AppError> {
        let stats_repo = StatsRepository::new(self.db);
        let since = Utc::now() - TimeDelta::days(30);

        Ok(UserStatsDto {
            total: stats_repo.count_users(None).await?,
            active: stats_repo.count_users_by_status(UserStatus::Active).await?,
            new_last_30_days: stats_repo.count_users_since(since).await?,
            banned: stats_repo.count_users_by_status(UserStatus::Banned).await?,
        })
    }

    pub async fn work_stats(&self) -> Result<WorkStatsDto, AppError> {
        let stats_repo = StatsRepository::new(self.db);

        Ok(WorkStatsDto {
            total: stats_repo.count_works(None, None).await?,
            approved: stats_repo
                .count_works(None, Some(WorkStatus::Approved))
                .await?,
            pending: stats_repo
                .count_works(None, Some(WorkStatus::Pending))
                .await?,
            rejected: stats_repo
                .count_works(None, Some(WorkStatus::Rejected))
                .await?,
            total_views: stats_repo.sum_work_views(None).await?,
            total_likes: stats_repo.sum_work_likes().await?,
        })
    }

    pub async fn activity_stats(&self) -> Result<ActivityStatsDto, AppError> {
        let stats_repo = StatsRepository::new(self.db);

        Ok(ActivityStatsDto {
            total: stats_repo.count_activities(None, &[]).await?,
            upcoming: stats_repo
                .count_activities(None, &[ActivityStatus::Upcoming])
                .await?,
            ongoing: stats_repo
                .count_activities(None, &[ActivityStatus::Ongoing])
                .await?,
            completed: stats_repo
                .count_activities(None, &[ActivityStatus::Completed])
                .await?,
            total_participants: stats_repo.count_participants().await?,
        })
    }

    /// This month against last month for users, works, views and comments.
    pub async fn overview(&self) -> Result<OverviewDto, AppError> {
        let stats_repo = StatsRepository::new(self.db);
        let this_month = Period::month_of(Utc::now());
        let last_month = this_month.previous_month();

        let users = MonthlyMetric {
            this_month: stats_repo.count_users(Some(this_month)).await? as i64,
            last_month: stats_repo.count_users(Some(last_month)).await? as i64,
        };
        let works = MonthlyMetric {
            this_month: stats_repo.count_works(Some(this_month), None).await? as i64,
            last_month: stats_repo.count_works(Some(last_month), None).await? as i64,
        };
        let views = MonthlyMetric {
            this_month: stats_repo.sum_work_views(Some(this_month)).await?,
            last_month: stats_repo.sum_work_views(Some(last_month)).await?,
        };
        let comments = MonthlyMetric {
            this_month: stats_repo.count_comments(Some(this_month), None).await? as i64,
            last_month: stats_repo.count_comments(Some(last_month), None).await? as i64,
        };

        Ok(OverviewDto {
            users: metric_dto(users),
            works: metric_dto(works),
            views: metric_dto(views),
            comments: metric_dto(comments),
        })
    }

    /// New and active users for each of the last six months, oldest first.
    pub async fn user_growth(&self) -> Result<Vec<UserGrowthPointDto>, AppError> {
        let stats_repo = StatsRepository::new(self.db);
        let mut points = Vec::with_capacity(SERIES_MONTHS);

        for month in recent_months(Utc::now(), SERIES_MONTHS) {
            points.push(UserGrowthPointDto {
                month: month.month_label(),
                new_users: stats_repo.count_users(Some(month)).await?,
                active_users: stats_repo.count_active_users(month).await?,
            });
        }

        Ok(points)
    }

    /// Approved works per type, including types with no works.
    pub async fn content_trend(&self) -> Result<Vec<ContentTrendDto>, AppError> {
        let counts = StatsRepository::new(self.db)
            .count_approved_works_by_type()
            .await?;

        Ok(WorkType::iter()
            .map(|work_type| ContentTrendDto {
                work_type: work_type_name(work_type).to_string(),
                count: counts
                    .iter()
                    .find(|(t, _)| *t == work_type)
                    .map(|(_, count)| *count as u64)
                    .unwrap_or(0),
            })
            .collect())
    }

    pub async fn participation(&self) -> Result<ParticipationDto, AppError> {
        let stats_repo = StatsRepository::new(self.db);
        let participating_users = stats_repo.count_participating_users().await?;
        let total_users = stats_repo.count_users(None).await?;

        Ok(ParticipationDto {
            participating_users,
            total_users,
            participation_rate: percentage(participating_users, total_users),
        })
    }

    /// Per-month creation counts for the last six months, oldest first.
    ///
    /// `views` totals the views of works created in that month.
    pub async fn monthly(&self) -> Result<Vec<MonthlyStatsDto>, AppError> {
        let stats_repo = StatsRepository::new(self.db);
        let mut months = Vec::with_capacity(SERIES_MONTHS);

        for month in recent_months(Utc::now(), SERIES_MONTHS) {
            months.push(MonthlyStatsDto {
                month: month.month_label(),
                new_users: stats_repo.count_users(Some(month)).await?,
                new_works: stats_repo.count_works(Some(month), None).await?,
                new_comments: stats_repo.count_comments(Some(month), None).await?,
                new_activities: stats_repo.count_activities(Some(month), &[]).await?,
                views: stats_repo.sum_work_views(Some(month)).await?,
            });
        }

        Ok(months)
    }
}

fn metric_dto(metric: MonthlyMetric) -> MetricDto {
    MetricDto {
        growth_rate: metric.growth_rate(),
        this_month: metric.this_month,
        last_month: metric.last_month,
    }
}

fn work_type_name(work_type: WorkType) -> &'static str {
    match work_type {
        WorkType::Poetry => "poetry",
        WorkType::Prose => "prose",
        WorkType::Novel => "novel",
        WorkType::Photo => "photo",
    }
}
