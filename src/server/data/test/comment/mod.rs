use crate::server::{
    data::comment::CommentRepository, model::comment::CommentListParam,
    util::pagination::SortDir,
};
use entity::sea_orm_active_enums::CommentStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_paginated;
mod review;
mod soft_delete;
