use crate::server::{
    data::activity::ActivityRepository,
    model::activity::{ActivityListParam, ActivitySortField},
    util::pagination::{PageParams, SortDir},
};
use chrono::NaiveDate;
use entity::sea_orm_active_enums::ActivityStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_by_id;
mod get_paginated;
mod get_paginated_for_user;
mod participant_counts;
mod soft_delete;
