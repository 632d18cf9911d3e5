use crate::server::{
    data::work::WorkRepository,
    model::work::{WorkListParam, WorkReview, WorkSortField},
    util::pagination::SortDir,
};
use entity::sea_orm_active_enums::{WorkStatus, WorkType};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod counters;
mod get_paginated;
mod review;
