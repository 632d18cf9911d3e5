use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PublicSummaryDto {
    pub total_users: u64,
    pub total_works: u64,
    pub total_views: i64,
    pub total_comments: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DashboardDto {
    pub total_users: u64,
    pub total_works: u64,
    pub pending_works: u64,
    pub total_activities: u64,
    pub active_activities: u64,
    pub total_comments: u64,
    pub pending_comments: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserStatsDto {
    pub total: u64,
    pub active: u64,
    pub new_last_30_days: u64,
    pub banned: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WorkStatsDto {
    pub total: u64,
    pub approved: u64,
    pub pending: u64,
    pub rejected: u64,
    pub total_views: i64,
    pub total_likes: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ActivityStatsDto {
    pub total: u64,
    pub upcoming: u64,
    pub ongoing: u64,
    pub completed: u64,
    pub total_participants: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MetricDto {
    pub this_month: i64,
    pub last_month: i64,
    pub growth_rate: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct OverviewDto {
    pub users: MetricDto,
    pub works: MetricDto,
    pub views: MetricDto,
    pub comments: MetricDto,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserGrowthPointDto {
    /// Month formatted as `YYYY-MM`.
    pub month: String,
    pub new_users: u64,
    pub active_users: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ContentTrendDto {
    #[serde(rename = "type")]
    pub work_type: String,
    pub count: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ParticipationDto {
    pub participating_users: u64,
    pub total_users: u64,
    pub participation_rate: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MonthlyStatsDto {
    pub month: String,
    pub new_users: u64,
    pub new_works: u64,
    pub new_comments: u64,
    pub new_activities: u64,
    pub views: i64,
}
